use reqlink::{RequestContext, Uri, congregate_link};

fn main() {
    // Under a CGI server these come from the environment: RequestContext::from_env()
    let ctx = RequestContext::from_vars([
        ("HTTP_HOST", "localhost"),
        ("SERVER_PORT", "8000"),
        ("REQUEST_URI", "/fr/catalog?page=2"),
    ]);

    let uri = Uri::with_fallback("", &ctx);
    println!("Current: {uri}"); // http://localhost:8000/fr/catalog?page=2

    let uri = uri.without_lang_segment(&["en", "fr"]);
    println!("Canonical: {uri}"); // http://localhost/catalog?page=2

    let link = congregate_link("catalog", "page=3", Some("https"), Some("shop.test"), None);
    println!("Next page: {link}"); // https://shop.test/catalog?page=3
}
