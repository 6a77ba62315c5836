use crate::NoiseSource;

// Default table key, so every `Perlin3D::new()` samples the same field
const DEFAULT_KEY: u64 = 0xAABBCCDDEEFF1122;

// 2^63, where `f64 as i64` starts saturating
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// Single-octave improved Perlin noise in 3D.
// The seed of a `Noise2D` is fed in as z, so the table itself is fixed per key.
#[derive(Clone)]
pub struct Perlin3D {
    key: u64,
    perm: [u8; 512],
}

impl Perlin3D {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_KEY)
    }

    // Build a permutation table from `key`. Different keys give unrelated fields.
    pub fn with_key(key: u64) -> Self {
        let mut p: Vec<u8> = (0..=255).collect();
        // xorshift; zero state would stay zero forever
        let mut x = if key == 0 { DEFAULT_KEY } else { key };
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        };
        // Fisher–Yates over p[0..256]
        for i in (1..256).rev() {
            let j = (rng() % (i as u64 + 1)) as usize;
            p.swap(i, j);
        }
        // Duplicated so corner lookups can index perm[a + 1] without wrapping
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }

        Self { key, perm }
    }

    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    // Pick one of 12 edge gradients from the low 4 bits and dot it with (x, y, z)
    #[inline]
    fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
        let h = hash & 0xF;
        let u = if h < 8 { x } else { y };
        let v = if h < 4 {
            y
        } else if h == 12 || h == 14 {
            x
        } else {
            z
        };
        let sign_u = if (h & 1) == 0 { u } else { -u };
        let sign_v = if (h & 2) == 0 { v } else { -v };
        sign_u + sign_v
    }

    // Lattice cell along x or y, wrapped to the table size
    #[inline]
    fn cell(t: f64) -> usize {
        (t.floor() as i64 & 255) as usize
    }

    // Full lattice coordinate along z. Seeds land here, so no bits are dropped:
    // anything beyond the i64 range keys on its float bits instead of saturating.
    #[inline]
    fn z_key(z: f64) -> u64 {
        let f = z.floor();
        if f.abs() < I64_LIMIT {
            f as i64 as u64
        } else {
            f.to_bits()
        }
    }

    // splitmix64 finalizer
    #[inline]
    fn mix(mut k: u64) -> u64 {
        k = (k ^ (k >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        k = (k ^ (k >> 27)).wrapping_mul(0x94D049BB133111EB);
        k ^ (k >> 31)
    }

    // x and y go through the permutation table; the z key is mixed in whole
    #[inline]
    fn hash(&self, xi: usize, yi: usize, zk: u64) -> u8 {
        let perm = &self.perm;
        let xy = perm[perm[xi] as usize + yi] as u64;
        Self::mix(zk ^ xy.wrapping_mul(0x9E3779B97F4A7C15)) as u8
    }

    fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, yi) = (Self::cell(x), Self::cell(y));
        let zi = Self::z_key(z);
        // Position within the unit cube
        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();
        let u = Self::fade(xf);
        let v = Self::fade(yf);
        let w = Self::fade(zf);

        let aaa = self.hash(xi, yi, zi);
        let aba = self.hash(xi, yi + 1, zi);
        let aab = self.hash(xi, yi, zi.wrapping_add(1));
        let abb = self.hash(xi, yi + 1, zi.wrapping_add(1));
        let baa = self.hash(xi + 1, yi, zi);
        let bba = self.hash(xi + 1, yi + 1, zi);
        let bab = self.hash(xi + 1, yi, zi.wrapping_add(1));
        let bbb = self.hash(xi + 1, yi + 1, zi.wrapping_add(1));

        let x1 = Self::lerp(
            Self::grad(aaa, xf, yf, zf),
            Self::grad(baa, xf - 1.0, yf, zf),
            u,
        );
        let x2 = Self::lerp(
            Self::grad(aba, xf, yf - 1.0, zf),
            Self::grad(bba, xf - 1.0, yf - 1.0, zf),
            u,
        );
        let y1 = Self::lerp(x1, x2, v);

        let x3 = Self::lerp(
            Self::grad(aab, xf, yf, zf - 1.0),
            Self::grad(bab, xf - 1.0, yf, zf - 1.0),
            u,
        );
        let x4 = Self::lerp(
            Self::grad(abb, xf, yf - 1.0, zf - 1.0),
            Self::grad(bbb, xf - 1.0, yf - 1.0, zf - 1.0),
            u,
        );
        let y2 = Self::lerp(x3, x4, v);

        Self::lerp(y1, y2, w)
    }
}

impl Default for Perlin3D {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Perlin3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Perlin3D").field("key", &self.key).finish()
    }
}

impl NoiseSource for Perlin3D {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise(x, y, z)
    }
}
