use std::error::Error;
use subnet_cidr_calculator::cfn::{handle_event, read_event, HandlerContext, HttpReporter};
use subnet_cidr_calculator::{config, logging, output, plan_from_args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    logging::init(config::LOG_CONFIG_FILE)?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("plan") => {
            let result = plan_from_args(&args[1..])?;
            println!("{}", output::render_plan(&result));
        }
        path => {
            let event = read_event(path)?;
            let ctx = HandlerContext::from_env();
            let reporter = HttpReporter::new(config::response_timeout())?;
            let response = handle_event(&event, &ctx, &reporter).await?;
            println!("{}", response.to_json()?);
        }
    }

    log::info!("#End main()");
    Ok(())
}
