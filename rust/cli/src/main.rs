fn main() {
    let code = freecell_cli::run(std::env::args(), &mut std::io::stdout(), &mut std::io::stderr());
    std::process::exit(code);
}
