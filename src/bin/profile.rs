use std::time::Duration;

use mazewalk::{AnimationConfig, MazeConfig, generate_and_solve};

fn main() -> mazewalk::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(100)
        .max(1);

    let animation = AnimationConfig::default();
    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    for seed in 0..num_iters {
        let config = MazeConfig::new(63, 63, seed)?;
        let elapsed = generate_and_solve(&config, &animation)?.elapsed;
        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
    }

    println!(
        "63x63 x {num_iters}: mean {:?}, min {:?}, max {:?}",
        total / num_iters,
        min,
        max
    );
    Ok(())
}
