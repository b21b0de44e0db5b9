use jsroutes_parser::parse;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <pattern>", args[0]);
        eprintln!();
        eprintln!("Parse a route path pattern and dump its segments");
        eprintln!("Example: {} '/users/:id(/:format)'", args[0]);
        process::exit(1);
    }

    match parse(&args[1]) {
        Ok(pattern) => {
            println!("{:#?}", pattern.segments);
            println!("param keys: {:?}", pattern.param_keys);
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    }
}
