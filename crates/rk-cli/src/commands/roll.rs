use colored::Colorize;

use rk_dice::{CoinFace, Die, roll, seeded_rng};

pub fn run(sides: u32, count: u32, seed: Option<u64>) -> Result<(), String> {
    let mut rng = seeded_rng(seed);
    let total = roll(sides, count, &mut rng);

    let label = format!("{count}{}", Die::from_sides(sides));
    if count == 1 && rk_dice::dice::is_coin(sides) {
        println!("  {label} = {}", CoinFace::from_draw(total).to_string().bold());
    } else {
        println!("  {label} = {}", total.to_string().bold());
    }
    Ok(())
}
