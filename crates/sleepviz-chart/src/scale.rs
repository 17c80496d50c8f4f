//! Mapping from data space to pixel space.

/// Continuous linear mapping from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Maps a domain value to the range. A degenerate domain maps to the range midpoint.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return f64::midpoint(r0, r1);
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Extends the domain outward to round tick boundaries.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let mut previous = None;
        for _ in 0..10 {
            let step = tick_step(start, stop, count);
            if step <= 0.0 || !step.is_finite() || previous == Some(step) {
                break;
            }
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
            previous = Some(step);
        }
        Self {
            domain: (start, stop),
            ..self
        }
    }

    /// Approximately `count` evenly spaced, human-friendly values inside the domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        ticks(start.min(stop), start.max(stop), count)
    }
}

/// Tick spacing of 1, 2 or 5 times a power of ten closest to `(stop - start) / count`.
#[expect(clippy::cast_precision_loss)]
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || stop <= start {
        return 0.0;
    }
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

#[expect(clippy::cast_possible_truncation)]
fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = tick_step(start, stop, count);
    if step <= 0.0 || !step.is_finite() {
        return if (stop - start).abs() < f64::EPSILON && count > 0 {
            vec![start]
        } else {
            vec![]
        };
    }
    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    // Divide by the inverse step for sub-unit steps to avoid 0.30000000000000004-style ticks.
    let inverse = 1.0 / step;
    (first..=last)
        .map(|i| {
            #[expect(clippy::cast_precision_loss)]
            let i = i as f64;
            if step < 1.0 {
                i / inverse.round()
            } else {
                i * step
            }
        })
        .collect()
}

/// Ordinal mapping of categories to evenly spaced bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    #[must_use]
    pub fn new<I>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut seen = Vec::<String>::new();
        for item in domain {
            let item = item.into();
            if !seen.contains(&item) {
                seen.push(item);
            }
        }
        Self {
            domain: seen,
            range,
            padding: 0.0,
        }
    }

    /// Sets the inner and outer padding as a fraction of the step.
    #[must_use]
    pub fn padding(self, padding: f64) -> Self {
        Self {
            padding: padding.clamp(0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[expect(clippy::cast_precision_loss)]
    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        (r1 - r0) / f64::max(1.0, n - self.padding + self.padding * 2.0)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start of the band for `key`, or `None` if it is not in the domain.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        let n = self.domain.len() as f64;
        let step = self.step();
        let (r0, r1) = self.range;
        let start = r0 + (r1 - r0 - step * (n - self.padding)) * 0.5;
        Some(start + step * index as f64)
    }
}
