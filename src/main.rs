//! Fetch! entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless demo: an automatic thrower plays a number of rounds and
//! every completed fetch is logged.
//!
//! Usage: `fetch [--seed N] [--throws N] [--tuning PATH]`

#[cfg(not(target_arch = "wasm32"))]
use fetch::TuningError;

/// Generous per-throw bound: settle, chase and return all finish well inside it
#[cfg(not(target_arch = "wasm32"))]
const TICKS_PER_THROW: u64 = 5000;

#[cfg(not(target_arch = "wasm32"))]
struct Args {
    seed: u64,
    throws: u64,
    tuning: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_args() -> Result<Args, TuningError> {
    let mut args = Args {
        seed: 1,
        throws: 5,
        tuning: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--seed" => args.seed = parse_number(&flag, &next_value(&mut iter, &flag)?)?,
            "--throws" => args.throws = parse_number(&flag, &next_value(&mut iter, &flag)?)?,
            "--tuning" => args.tuning = Some(next_value(&mut iter, &flag)?.into()),
            _ => {
                return Err(TuningError::BadArgument {
                    flag: flag.clone(),
                    reason: "unknown flag".to_string(),
                });
            }
        }
    }
    Ok(args)
}

#[cfg(not(target_arch = "wasm32"))]
fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, TuningError> {
    iter.next().ok_or_else(|| TuningError::BadArgument {
        flag: flag.to_string(),
        reason: "missing value".to_string(),
    })
}

/// Tick cap for a demo of `throws` rounds
#[cfg(not(target_arch = "wasm32"))]
fn tick_budget(throws: u64) -> u64 {
    throws.max(1).saturating_mul(TICKS_PER_THROW)
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_number(flag: &str, value: &str) -> Result<u64, TuningError> {
    value.parse().map_err(|_| TuningError::BadArgument {
        flag: flag.to_string(),
        reason: format!("'{}' is not a number", value),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fetch::Tuning;
    use fetch::sim::{Autoplay, GameEvent, GameState, tick};

    env_logger::init();
    log::info!("Fetch! (native) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("usage: fetch [--seed N] [--throws N] [--tuning PATH]");
            std::process::exit(2);
        }
    };

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|e| {
            log::warn!("{}; using default tuning", e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let mut state = GameState::new(tuning);
    let mut autoplay = Autoplay::new(args.seed);
    let mut thrown = 0u64;
    let max_ticks = tick_budget(args.throws);

    log::info!("Demo with seed {}, {} throws", args.seed, args.throws);

    while state.time_ticks < max_ticks {
        let input = autoplay.input_for(&state);
        if input.throw.is_some() && thrown == args.throws {
            break;
        }
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::Thrown => {
                    thrown += 1;
                    println!(
                        "[{:>6}] throw #{} velocity ({:.1}, {:.1})",
                        state.time_ticks, thrown, state.ball.vel.x, state.ball.vel.y
                    );
                }
                GameEvent::Delivered { scored: true } => {
                    println!("[{:>6}] fetched! score {}", state.time_ticks, state.score);
                }
                _ => {}
            }
        }
    }

    println!(
        "\n{} throws, {} fetches in {} ticks",
        thrown, state.score, state.time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_tick_budget_saturates() {
        assert_eq!(tick_budget(0), TICKS_PER_THROW);
        assert_eq!(tick_budget(3), 3 * TICKS_PER_THROW);
        assert_eq!(tick_budget(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number("--seed", "42").unwrap(), 42);
        assert!(matches!(
            parse_number("--throws", "lots"),
            Err(TuningError::BadArgument { .. })
        ));
    }
}
