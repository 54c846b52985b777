/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Clamp a sampled metric onto the 1–5 review scale.
fn scale_1_5(rng: &mut SimpleRng, mean: f64, std_dev: f64) -> f64 {
    rng.gauss(mean, std_dev).clamp(1.0, 5.0)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (name, code, reviews, mean difficulty, mean workload hrs, mean rating)
    let courses: [(&str, &str, usize, f64, f64, f64); 6] = [
        ("Graduate Algorithms", "CS-6515", 120, 4.3, 22.0, 3.9),
        ("Machine Learning", "CS-7641", 90, 3.8, 20.0, 3.5),
        ("Advanced Operating Systems", "CS-6210", 60, 4.1, 18.0, 4.2),
        ("Computer Networks", "CS-6250", 75, 2.4, 9.0, 4.0),
        ("Game AI", "CS-7632", 40, 2.8, 12.0, 4.1),
        ("Info Security Policies", "PUBP-6725", 25, 1.9, 7.0, 3.4),
    ];

    let output_path = "sample_reviews.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Course Name", "Course Code", "rating", "difficulty", "workload"])
        .expect("Failed to write header");

    let mut total = 0usize;
    for (name, code, reviews, difficulty, workload, rating) in courses {
        for _ in 0..reviews {
            // Roughly one review in ten skips each metric.
            let skip_rating = rng.next_f64() < 0.1;
            let skip_difficulty = rng.next_f64() < 0.1;
            let skip_workload = rng.next_f64() < 0.1;

            let cell = |skip: bool, v: f64| if skip { String::new() } else { format!("{v:.1}") };
            writer
                .write_record([
                    name.to_string(),
                    code.to_string(),
                    cell(skip_rating, scale_1_5(&mut rng, rating, 0.8)),
                    cell(skip_difficulty, scale_1_5(&mut rng, difficulty, 0.6)),
                    cell(skip_workload, rng.gauss(workload, workload * 0.25).max(1.0)),
                ])
                .expect("Failed to write row");
            total += 1;
        }
    }

    writer.flush().expect("Failed to flush writer");
    println!("Wrote {total} reviews for {} courses to {output_path}", courses.len());
}
