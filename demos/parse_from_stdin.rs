use generic_uri::Uri;
use std::error::Error;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let token = input.split_whitespace().next().unwrap_or("");

    let uri = Uri::parse(token)?;
    print_component("scheme", uri.scheme().map(|s| s.as_str()));
    print_component("user-info", uri.user_info());
    print_component("host", uri.host());
    match uri.port() {
        Some(port) => println!("{:<9} : {port}", "port"),
        None => println!("{:<9} : <absent>", "port"),
    }
    print_component("path", uri.path());
    print_component("query", uri.query());
    print_component("fragment", uri.fragment());
    Ok(())
}

fn print_component(name: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("{name:<9} : {v}"),
        None => println!("{name:<9} : <absent>"),
    }
}
