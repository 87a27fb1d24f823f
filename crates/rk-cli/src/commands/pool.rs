use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use rk_dice::{DiceError, DicePool, Die, PoolOutcome, PoolRoll, RollMode, parse_pool, seeded_rng};

pub fn run(
    dice: &[String],
    bonus: i64,
    mode: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mode: RollMode = mode.parse().map_err(|e: DiceError| e.to_string())?;

    let faces = parse_pool(&dice.join(" ")).map_err(|e| e.to_string())?;
    let mut pool = DicePool::new();
    pool.extend_from(&faces).map_err(|e| e.to_string())?;
    if pool.is_empty() {
        return Err("no dice to roll".into());
    }

    let mut rng = seeded_rng(seed);
    let outcome = mode.roll(pool.faces(), bonus, &mut rng);

    if json {
        let text = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("cannot serialize result: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    print_outcome(&pool, &outcome);
    Ok(())
}

fn print_outcome(pool: &DicePool, outcome: &PoolOutcome) {
    println!(
        "  {} {}",
        outcome.mode().label().dimmed(),
        outcome.headline().bold()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Die", "Result"]);
    for (i, (sides, entry)) in pool.faces().iter().zip(outcome.rolls()).enumerate() {
        let result = match entry {
            PoolRoll::Die { value, .. } => value.to_string(),
            PoolRoll::Coin { face } => face.to_string(),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            Die::from_sides(*sides).to_string(),
            result,
        ]);
    }
    println!("{table}");
    println!();
    println!("  {}", outcome.description());
}
