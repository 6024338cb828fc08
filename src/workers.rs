use std::thread;
use std::time::Duration;

use log::info;

fn worker(label: &'static str, iterations: usize, interval: Duration) {
    for iteration in 0..iterations {
        info!("{} - iteration {}", label, iteration);
        thread::sleep(interval);
    }
}

/// Runs the two staggered workers and joins both. The workers share
/// nothing; their log lines interleave according to the two intervals.
pub fn run_staggered(iterations: usize, fast_interval: Duration, slow_interval: Duration) {
    let fast = thread::spawn(move || worker("worker-fast", iterations, fast_interval));
    let slow = thread::spawn(move || worker("worker-slow", iterations, slow_interval));
    fast.join().unwrap();
    slow.join().unwrap();
}
