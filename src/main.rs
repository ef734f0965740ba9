use env_logger::Env;

fn main() {
    let env = Env::default().filter_or("TABULA_LOG", "info");
    env_logger::Builder::from_env(env).init();

    log::info!("Pawn Board - terminal");
    tabula::visualization::run_interactive_terminal();
}
