//! Writes a deterministic sample component catalog to `sample_catalog.csv`,
//! sized so the per-supplier charts spill over onto multiple pages.

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

    /// Pick from a slice with a bias toward the front, so value frequencies
    /// come out uneven like a real catalog.
    fn pick_biased<'a, T: ?Sized>(&mut self, items: &'a [&'a T]) -> &'a T {
        let r = self.next_f64();
        let idx = (r * r * items.len() as f64) as usize;
        items[idx.min(items.len() - 1)]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let suppliers: &[&str] = &[
        "Texas Instruments",
        "Analog Devices Inc.",
        "Microchip Technology",
        "STMicroelectronics",
        "NXP USA Inc.",
        "Renesas Electronics",
        "onsemi",
        "Maxim Integrated",
        "Cirrus Logic Inc.",
        "Infineon Technologies",
        "Rohm Semiconductor",
        "Silicon Labs",
        "Skyworks Solutions Inc.",
        "Diodes Incorporated",
        "Nisshinbo Micro Devices Inc.",
        "ABLIC Inc.",
        "iC-Haus GmbH",
        "3PEAK Incorporated",
    ];
    // "-" stands in for an unspecified package
    let packages: &[&str] = &[
        "8-SOIC",
        "16-TSSOP",
        "10-MSOP",
        "20-QFN",
        "6-SOT-23",
        "32-LQFP",
        "24-WQFN",
        "8-DIP",
        "16-SSOP",
        "48-LQFP",
        "5-SC-70",
        "-",
    ];
    let resolutions: &[&str] = &["12", "16", "10", "8", "14", "24", "18", "20"];
    let sampling_rates: &[&str] = &["1M", "500k", "100k", "2M", "250k", "5M", "10M"];

    let output_path = "sample_catalog.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Part Number",
            "Supplier",
            "Supplier Device Package",
            "Resolution (Bits)",
            "Sampling Rate (Per Second)",
            "Price",
        ])
        .expect("Failed to write header");

    let n_rows = 600;
    for row_id in 0..n_rows {
        let supplier = rng.pick_biased(suppliers);
        let package = rng.pick_biased(packages);
        let resolution = rng.pick_biased(resolutions);
        let sampling = rng.pick_biased(sampling_rates);

        let bits: f64 = resolution.parse().unwrap();
        let base = 0.35 + 0.22 * bits;
        let price = rng.gauss(base, base * 0.25).max(0.10);

        // roughly one row in forty ships without a price
        let price_field = if rng.next_f64() < 0.025 {
            String::new()
        } else {
            format!("{price:.2}")
        };

        let part_number = format!("IC-{row_id:05}");
        writer
            .write_record([
                part_number.as_str(),
                supplier,
                package,
                resolution,
                sampling,
                price_field.as_str(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {n_rows} components to {output_path}");
}
