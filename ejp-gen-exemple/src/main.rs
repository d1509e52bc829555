use ejp_gen_core::engine::generator::Generator;
use ejp_gen_core::engine::prediction_input::{Method, PredictionInput};
use ejp_gen_core::engine::variants::Algorithm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The generator is stateless between requests: every call derives its
    // own random source from the request's seed
    let app = Generator::new();

    // Seeded request: same seed text, same numbers, on any machine
    let mut input = PredictionInput::new(Method::Algorithm(Algorithm::Statistical));
    input.sets = 3;
    input.seed = Some("demo seed".to_owned());

    for (i, set) in app.predict(&input)?.iter().enumerate() {
        println!(
            "Set {}: main {:?} euro {:?}",
            i + 1,
            set.sorted_main(),
            set.sorted_euro()
        );
    }

    // Re-running the exact same request reproduces the output
    let first = app.predict(&input)?;
    let second = app.predict(&input)?;
    println!("Reproducible: {}", first == second);

    // Method keys are the same strings the HTTP API accepts
    let consensus: Method = "consensus".parse()?;
    let mut consensus_input = PredictionInput::new(consensus);
    consensus_input.seed = Some("demo seed".to_owned());

    let sets = app.predict(&consensus_input)?;
    println!(
        "Consensus set: main {:?} euro {:?}",
        sets[0].sorted_main(),
        sets[0].sorted_euro()
    );

    // No seed means ambient randomness; this line changes on every run
    let unseeded = PredictionInput::new(Method::Algorithm(Algorithm::Quantum));
    println!("Unseeded quantum set: {:?}", app.predict(&unseeded)?[0].sorted_main());

    // Attempting to parse a method key that does not exist
    match "oracle".parse::<Method>() {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("This method ('oracle') does not exist"),
    }

    // Requesting zero sets is rejected instead of returning nothing
    let mut zero = PredictionInput::new(Method::Algorithm(Algorithm::Neural));
    zero.sets = 0;
    match app.predict(&zero) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Zero sets is invalid, must be at least 1"),
    }

    Ok(())
}
