use log::info;

use fracfunc::configuration::DemoConfiguration;
use fracfunc::evaluation::batchevaluation::evaluate_manager;
use fracfunc::evaluation::evaluationrecord::EvaluationSummary;
use fracfunc::function::fractionalfunction::FractionalFunction;
use fracfunc::manager::manager::IManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DemoConfiguration::default_demo();
    let manager = config.function_manager();
    info!("loaded {} functions", manager.len());

    for (_, function) in manager.functions() {
        println!("{}", function.describe());
        for &x in config.evaluation_points() {
            match function.evaluate(x) {
                Ok(value) => println!("  value at x={}: {}", x, value),
                Err(error) => eprintln!("  error: {}", error)
            }
        }
        println!();
    }

    let (name, x) = config.failure_demo();
    match manager.evaluate(name, x) {
        Ok(value) => println!("{} at x={} unexpectedly gave {}", name, x, value),
        Err(error) => println!("caught for '{}' at x={}: {}", name, x, error)
    }
    println!();

    let records = evaluate_manager(&manager, config.evaluation_points());
    let summary = EvaluationSummary::from_records(&records);
    println!("{}", serde_json::to_string_pretty(&records)?);
    println!("succeeded: {}, failed: {}", summary.succeeded(), summary.failed());
    Ok(())
}
