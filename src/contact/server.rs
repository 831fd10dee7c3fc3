// src/contact/server.rs
// =============================================================================
// The contact lookup web form.
//
// One resource at "/":
// - GET  renders the empty form
// - POST takes the form field `name`, runs the lookup and renders the form
//        again with either the scraped details or the error message
//
// Submissions are handled one at a time per request; there is no queueing.
// =============================================================================

use actix_web::{dev::Server, middleware::Logger, web, App, HttpResponse, HttpServer};
use askama::Template;
use serde::Deserialize;
use std::net::TcpListener;

use super::{ContactError, ContactFinder, ContactResult};

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    name: String,
    result: Option<ContactResult>,
    error: Option<String>,
}

impl ContactTemplate {
    fn empty() -> Self {
        ContactTemplate {
            name: String::new(),
            result: None,
            error: None,
        }
    }

    fn from_outcome(name: String, outcome: Result<ContactResult, ContactError>) -> Self {
        match outcome {
            Ok(result) => ContactTemplate {
                name,
                result: Some(result),
                error: None,
            },
            Err(e) => ContactTemplate {
                name,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    name: String,
}

async fn index() -> HttpResponse {
    render(ContactTemplate::empty())
}

async fn lookup(finder: web::Data<ContactFinder>, form: web::Form<LookupForm>) -> HttpResponse {
    let name = form.into_inner().name;
    log::info!("Looking up contact details for {:?}", name);

    let outcome = finder.lookup(&name).await;
    if let Err(ref e) = outcome {
        log::warn!("Lookup for {:?} failed: {}", name, e);
    }

    render(ContactTemplate::from_outcome(name, outcome))
}

fn render(template: ContactTemplate) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render contact template: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Registers the form routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(lookup)),
    );
}

// Starts the server on an already-bound listener
pub fn run(listener: TcpListener, finder: ContactFinder) -> Result<Server, std::io::Error> {
    let finder = web::Data::new(finder);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure)
            .app_data(finder.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
