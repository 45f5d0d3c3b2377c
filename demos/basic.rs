use reqlink::Uri;

fn main() {
    let mut uri = Uri::new("https://example.com:8080/en/docs/intro?tab=api&lang[]=rs#top");

    println!("Link: {uri}"); // https://example.com:8080/en/docs/intro?tab=api&lang[]=rs#top
    println!("Scheme: {}", uri.scheme()); // https
    println!("Host: {}", uri.host()); // example.com
    println!("Port: {}", uri.port()); // 8080
    println!("Path: {}", uri.path()); // /en/docs/intro
    println!("Query: {}", uri.query()); // tab=api&lang[]=rs
    println!("Origin: {}", uri.origin()); // https://example.com:8080
    println!("Segments: {:?}", uri.segments()); // ["en", "docs", "intro"]
    println!("Params: {:?}", uri.params()); // ["tab=api", "lang[]=rs"]
    println!("Tab: {:?}", uri.params_map().get_str("tab")); // Some("api")

    uri.remove_lang_segment(&["en", "fr"]);
    println!("Without lang: {uri}"); // https://example.com/docs/intro?tab=api&lang[]=rs
}
