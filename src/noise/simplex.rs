//! Seeded 2D simplex noise
//!
//! The lattice permutation is shuffled by a Park-Miller generator seeded from
//! the caller's seed, so every instance is a pure function of that seed. The
//! sampler skews the plane into triangles, sums the kernel contributions of the
//! three surrounding corners and returns a value in roughly `[-1, 1]`.

/// Park-Miller modulus `2^31 - 1`
const LCG_MODULUS: i64 = 2_147_483_647;
/// Park-Miller multiplier
const LCG_MULTIPLIER: i64 = 16_807;

/// Edge midpoints of a cube, only the x/y components are used in 2D
const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Output scale that maps the kernel sum onto roughly `[-1, 1]`
const OUTPUT_SCALE: f64 = 70.0;

/// Deterministic simplex noise sampler
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

/// Minimal Park-Miller generator driving the permutation shuffle
struct ParkMiller {
    state: i64,
}

impl ParkMiller {
    const fn new(seed: i64) -> Self {
        // Reducing first keeps the product inside i64 without changing the sequence
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    fn next_unit(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        (self.state - 1) as f64 / (LCG_MODULUS - 1) as f64
    }
}

impl SimplexNoise {
    /// Build the permutation table for a seed
    pub fn new(seed: i64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = ParkMiller::new(seed);

        for i in (1..256_usize).rev() {
            let pick = (rng.next_unit() * (i + 1) as f64).floor();
            // Seeds of zero or below drive the generator negative
            let j = (pick.max(0.0) as usize).min(i);
            table.swap(i, j);
        }

        let perm: [u8; 512] = std::array::from_fn(|i| table.get(i & 255).copied().unwrap_or(0));
        let perm_mod12: [u8; 512] = std::array::from_fn(|i| perm.get(i).map_or(0, |p| p % 12));

        Self { perm, perm_mod12 }
    }

    fn perm(&self, index: usize) -> usize {
        self.perm.get(index).copied().map_or(0, usize::from)
    }

    fn gradient(&self, index: usize) -> [f64; 2] {
        let slot = self.perm_mod12.get(index).copied().map_or(0, usize::from);
        GRADIENTS.get(slot).copied().unwrap_or([0.0, 0.0])
    }

    /// Sample the noise at a point, returning a value in roughly `[-1, 1]`
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let sqrt3 = 3.0_f64.sqrt();
        let skew = 0.5 * (sqrt3 - 1.0);
        let unskew = (3.0 - sqrt3) / 6.0;

        let s = (x + y) * skew;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * unskew;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower or upper triangle of the skewed cell
        let (i1, j1): (u8, u8) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + unskew;
        let y1 = y0 - f64::from(j1) + unskew;
        let x2 = x0 - 1.0 + 2.0 * unskew;
        let y2 = y0 - 1.0 + 2.0 * unskew;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let g0 = ii + self.perm(jj);
        let g1 = ii + usize::from(i1) + self.perm(jj + usize::from(j1));
        let g2 = ii + 1 + self.perm(jj + 1);

        let n0 = self.corner(g0, x0, y0);
        let n1 = self.corner(g1, x1, y1);
        let n2 = self.corner(g2, x2, y2);

        OUTPUT_SCALE * (n0 + n1 + n2)
    }

    fn corner(&self, index: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let t2 = t * t;
        let [gx, gy] = self.gradient(index);
        t2 * t2 * (gx * x + gy * y)
    }
}
