//! Deal a roster into teams.
//!
//! Picks a raffle winner, then splits the whole roster round-robin into three
//! teams. With nine people and three teams every team gets three; with ten,
//! the first team gets the extra player.

use tombola::{draw_into_groups, random_value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roster = [
        "Alva", "Birk", "Cleo", "Dag", "Elsa", "Finn", "Greta", "Hugo", "Ines", "Jon",
    ];

    let winner = random_value(Some(&roster[..]))?;
    println!("raffle winner: {winner}");
    println!();

    let teams = draw_into_groups(Some(&roster[..]), roster.len() as i64, 3)?;
    for (i, team) in teams.iter().enumerate() {
        println!("team {}: {}", i + 1, team.join(", "));
    }

    Ok(())
}
