//! Static landing page listing the API endpoints.

use axum::response::Html;

pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn ep(method: &'static str, path: &'static str, description: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        description,
    }
}

pub const SECTIONS: &[(&str, &[Endpoint])] = &[
    (
        "User Endpoints",
        &[
            ep("POST", "/api/create-user", "Add a new user"),
            ep("DELETE", "/api/delete-user", "Delete a user by ID"),
            ep("GET", "/api/get-users", "Retrieve all users"),
        ],
    ),
    (
        "Blog Endpoints",
        &[
            ep("POST", "/api/create-blog", "Add a new blog post"),
            ep("PATCH", "/api/update-blog", "Update a blog post by ID"),
            ep("DELETE", "/api/delete-blog", "Delete a blog post by ID"),
            ep("GET", "/api/get-blogs", "Retrieve all blog posts"),
        ],
    ),
    (
        "Comment Endpoints",
        &[
            ep("POST", "/api/add-comment", "Add a comment to a blog post"),
            ep("POST", "/api/get-comment", "Retrieve comments for a blog post"),
            ep("GET", "/api/get-comment?blog_post_id=", "Retrieve comments for a blog post"),
            ep("DELETE", "/api/delete-comment", "Delete a comment by ID"),
        ],
    ),
];

pub async fn landing() -> Html<String> {
    let mut html = String::from(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Blog API</title>\
         <style>body{font-family:Arial,sans-serif;display:flex;flex-direction:column;align-items:center;padding:20px}\
         table{border-collapse:collapse;width:80%;margin-bottom:20px}\
         th,td{border:1px solid #ddd;padding:8px}th{background:#f2f2f2}</style></head><body>\n\
         <h1>Blog API</h1>\n<h2>API Endpoints</h2>\n\
         <p>Send JSON bodies to the endpoints below with any HTTP client.</p>\n",
    );
    for (title, endpoints) in SECTIONS {
        html.push_str(&format!(
            "<h3>{}</h3>\n<table><thead><tr><th>Method</th><th>Endpoint</th><th>Description</th></tr></thead><tbody>\n",
            title
        ));
        for e in endpoints.iter() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                e.method, e.path, e.description
            ));
        }
        html.push_str("</tbody></table>\n");
    }
    html.push_str("</body></html>\n");
    Html(html)
}
