//! Mirrored stroke capture and mask rasterization
//!
//! Frequency spectra of real images are point-symmetric about the center,
//! so suppressing a bin only makes sense together with its mirror twin.
//! The recorder keeps every drawn stroke paired with its point reflection
//! about the canvas center; the rasterizer stamps both into a per-pixel
//! attenuation mask aligned with the centered spectrum view.

/// One sampled pointer position. Pressure scales the stamped attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub pressure: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, pressure: f64) -> Self {
        Self { x, y, pressure }
    }

    /// Mouse-style input carries no pressure channel; treat it as full.
    pub fn unpressured(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }
}

/// Pointer lifecycle events fed to the recorder by the UI layer.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up(PointerSample),
}

/// A completed polyline of pointer samples.
pub type Stroke = Vec<PointerSample>;

/// Records strokes together with their mirrored twins.
///
/// The mirror center is fixed at the canvas midpoint on construction, so a
/// recorder is only valid for one canvas size.
pub struct MirroredStrokes {
    center_x: f64,
    center_y: f64,
    strokes: Vec<Stroke>,
    drawing: bool,
}

impl MirroredStrokes {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            strokes: Vec::new(),
            drawing: false,
        }
    }

    fn mirror(&self, p: PointerSample) -> PointerSample {
        PointerSample::new(
            self.center_x + (self.center_x - p.x),
            self.center_y + (self.center_y - p.y),
            p.pressure,
        )
    }

    /// Feed one pointer event. Down starts a stroke and its twin, Move
    /// extends both, Up appends the final sample and completes them.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => {
                let mirrored = self.mirror(p);
                self.strokes.push(vec![p]);
                self.strokes.push(vec![mirrored]);
                self.drawing = true;
            }
            PointerEvent::Move(p) | PointerEvent::Up(p) => {
                if !self.drawing {
                    return;
                }
                let mirrored = self.mirror(p);
                let n = self.strokes.len();
                self.strokes[n - 2].push(p);
                self.strokes[n - 1].push(mirrored);
                if matches!(event, PointerEvent::Up(_)) {
                    self.drawing = false;
                }
            }
        }
    }

    /// All strokes recorded so far, mirrored twins included.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }
}

/// Round brush geometry for rasterization.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    /// Radius of full attenuation, in pixels.
    pub radius: f64,
    /// Additional falloff band beyond the hard radius.
    pub softness: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            radius: 4.0,
            softness: 2.0,
        }
    }
}

impl Brush {
    fn falloff(&self, dist_sqr: f64) -> f64 {
        let hard_sqr = self.radius * self.radius;
        let outer = self.radius + self.softness;
        let outer_sqr = outer * outer;

        if dist_sqr <= hard_sqr {
            1.0
        } else if dist_sqr >= outer_sqr {
            0.0
        } else {
            let t = (outer_sqr - dist_sqr) / (outer_sqr - hard_sqr);
            t * t
        }
    }
}

/// Rasterize strokes into a width x height attenuation mask in [0,1].
///
/// Each stroke polyline is stamped at sub-brush spacing; overlapping stamps
/// combine by maximum so retracing a region never pushes attenuation past
/// the strongest stamp.
pub fn rasterize(strokes: &[Stroke], width: usize, height: usize, brush: &Brush) -> Vec<f64> {
    let mut mask = vec![0.0f64; width * height];
    if mask.is_empty() {
        return mask;
    }

    for stroke in strokes {
        match stroke.as_slice() {
            [] => {}
            [only] => stamp(&mut mask, width, height, brush, *only),
            points => {
                for pair in points.windows(2) {
                    stamp_segment(&mut mask, width, height, brush, pair[0], pair[1]);
                }
            }
        }
    }

    mask
}

fn stamp_segment(
    mask: &mut [f64],
    width: usize,
    height: usize,
    brush: &Brush,
    from: PointerSample,
    to: PointerSample,
) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();

    let spacing = (brush.radius / 2.0).max(0.5);
    let steps = (length / spacing).ceil() as usize;

    for i in 0..=steps {
        let t = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
        let sample = PointerSample::new(
            from.x + dx * t,
            from.y + dy * t,
            from.pressure + (to.pressure - from.pressure) * t,
        );
        stamp(mask, width, height, brush, sample);
    }
}

fn stamp(mask: &mut [f64], width: usize, height: usize, brush: &Brush, p: PointerSample) {
    let reach = brush.radius + brush.softness;
    let x_min = (p.x - reach).floor().max(0.0) as usize;
    let y_min = (p.y - reach).floor().max(0.0) as usize;
    let x_max = ((p.x + reach).ceil() as usize).min(width.saturating_sub(1));
    let y_max = ((p.y + reach).ceil() as usize).min(height.saturating_sub(1));

    if x_min > x_max || y_min > y_max {
        return;
    }

    let pressure = p.pressure.clamp(0.0, 1.0);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dist_sqr = (x as f64 - p.x).powi(2) + (y as f64 - p.y).powi(2);
            let alpha = pressure * brush.falloff(dist_sqr);
            let cell = &mut mask[y * width + x];
            if alpha > *cell {
                *cell = alpha;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strokes_come_in_mirrored_pairs() {
        let mut rec = MirroredStrokes::new(100, 100);
        rec.handle(PointerEvent::Down(PointerSample::new(10.0, 20.0, 0.8)));
        rec.handle(PointerEvent::Move(PointerSample::new(15.0, 25.0, 0.9)));
        rec.handle(PointerEvent::Up(PointerSample::new(20.0, 30.0, 0.7)));

        let strokes = rec.strokes();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].len(), 3);
        assert_eq!(strokes[1].len(), 3);

        for (p, m) in strokes[0].iter().zip(&strokes[1]) {
            assert_eq!(m.x, 50.0 + (50.0 - p.x));
            assert_eq!(m.y, 50.0 + (50.0 - p.y));
            assert_eq!(m.pressure, p.pressure);
        }
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut rec = MirroredStrokes::new(64, 64);
        rec.handle(PointerEvent::Move(PointerSample::unpressured(5.0, 5.0)));
        assert!(rec.strokes().is_empty());
    }

    #[test]
    fn up_completes_the_stroke() {
        let mut rec = MirroredStrokes::new(64, 64);
        rec.handle(PointerEvent::Down(PointerSample::unpressured(8.0, 8.0)));
        assert!(rec.is_drawing());
        rec.handle(PointerEvent::Up(PointerSample::unpressured(9.0, 9.0)));
        assert!(!rec.is_drawing());
    }

    #[test]
    fn rasterized_mask_stays_in_unit_range() {
        let mut rec = MirroredStrokes::new(32, 32);
        rec.handle(PointerEvent::Down(PointerSample::new(8.0, 8.0, 0.6)));
        rec.handle(PointerEvent::Up(PointerSample::new(12.0, 12.0, 0.6)));

        let mask = rasterize(rec.strokes(), 32, 32, &Brush::default());
        assert_eq!(mask.len(), 32 * 32);
        assert!(mask.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn mask_covers_stroke_and_mirror() {
        let mut rec = MirroredStrokes::new(32, 32);
        rec.handle(PointerEvent::Down(PointerSample::unpressured(8.0, 8.0)));
        rec.handle(PointerEvent::Up(PointerSample::unpressured(8.0, 8.0)));

        let mask = rasterize(rec.strokes(), 32, 32, &Brush::default());
        assert!(mask[8 * 32 + 8] > 0.9);
        // mirror of (8,8) about (16,16)
        assert!(mask[24 * 32 + 24] > 0.9);
    }

    #[test]
    fn retracing_does_not_exceed_stamp_maximum() {
        let strokes = vec![
            vec![PointerSample::new(10.0, 10.0, 0.5)],
            vec![PointerSample::new(10.0, 10.0, 0.5)],
        ];
        let mask = rasterize(&strokes, 32, 32, &Brush::default());
        assert!((mask[10 * 32 + 10] - 0.5).abs() < 1e-12);
    }
}
