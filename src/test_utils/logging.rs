use std::time::Instant;

/// Prints a framed trace of one test so failures read as a story.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
    steps: usize,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Self {
        println!("\n{}", "=".repeat(60));
        println!("[TEST START] {test_name}");
        println!("{}", "=".repeat(60));
        Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
            steps: 0,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.steps += 1;
        println!("[STEP {}] {description}", self.steps);
    }

    pub fn log_value<T: std::fmt::Debug>(&self, name: &str, value: &T) {
        println!("[VALUE] {name}: {value:?}");
    }

    pub fn pass(&self) {
        println!(
            "[RESULT] {} PASSED after {} steps in {:?}",
            self.test_name,
            self.steps,
            self.start_time.elapsed()
        );
        println!("{}\n", "=".repeat(60));
    }
}
