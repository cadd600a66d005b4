use crate::config::StarfieldConfig;
use crate::constants::*;
use crate::rng::Sampler;
use crate::surface::{Surface, SurfaceSize};

#[derive(Debug, Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    radius: f64,
    base_opacity: f64,
    opacity: f64,
    twinkle_freq: f64,
    speed: f64,
}

#[derive(Debug, Clone, Copy)]
struct ShootingStar {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    life: f64,
}

/// The starfield core: owns the surface, both particle collections and
/// the frame clock. Host wiring feeds it resize/visibility signals and
/// timestamps; it never talks to the DOM itself.
pub struct StarfieldAnimator<S: Surface, R: Sampler> {
    cfg: StarfieldConfig,
    surface: S,
    rng: R,
    size: SurfaceSize,
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
    last_tick: Option<f64>,
}

impl<S: Surface, R: Sampler> StarfieldAnimator<S, R> {
    pub fn new(cfg: StarfieldConfig, surface: S, rng: R) -> Self {
        Self {
            cfg: cfg.normalize(),
            surface,
            rng,
            size: SurfaceSize::clamped(1.0, 1.0, 1.0),
            stars: Vec::new(),
            shooting: Vec::new(),
            last_tick: None,
        }
    }

    /// Apply new surface measurements and rebuild the star set from
    /// scratch. Shooting stars in flight are kept.
    pub fn resize(&mut self, size: SurfaceSize) {
        let size = SurfaceSize::clamped(size.width, size.height, size.scale);
        self.surface.set_size(size);
        self.size = size;
        self.generate_stars();
    }

    /// Forget the elapsed-time baseline so the next tick runs with zero
    /// elapsed time. Called when the page becomes visible again.
    pub fn reset_clock(&mut self) {
        self.last_tick = None;
    }

    fn generate_stars(&mut self) {
        let count = ((self.size.width * self.size.height * self.cfg.density).floor() as usize)
            .min(self.cfg.max_stars);
        self.stars.clear();
        for _ in 0..count {
            let star = Star {
                x: self.rng.range(0.0, self.size.width),
                y: self.rng.range(0.0, self.size.height),
                radius: self.rng.range(self.cfg.r_min, self.cfg.r_max),
                base_opacity: self.rng.range(BASE_OPACITY_MIN, BASE_OPACITY_MAX),
                opacity: 0.7,
                twinkle_freq: self.rng.range(TWINKLE_FREQ_MIN, TWINKLE_FREQ_MAX),
                speed: self.rng.range(SPEED_FACTOR_MIN, SPEED_FACTOR_MAX) * self.cfg.speed,
            };
            self.stars.push(star);
        }
    }

    fn spawn_shooting_star(&mut self) {
        let x = self.rng.range(0.0, self.size.width * SPAWN_REGION_W);
        let y = self.rng.range(0.0, self.size.height * SPAWN_REGION_H);
        let angle = LAUNCH_ANGLE + (self.rng.next_f64() - 0.5) * LAUNCH_JITTER;
        let speed = self.cfg.shooting_speed + self.rng.range(0.0, SPEED_BONUS_MAX);
        let life = self.rng.range(LIFE_MIN, LIFE_MAX);
        self.shooting.push(ShootingStar {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            life,
        });
    }

    /// One update+draw pass. Movement is normalized to a 60Hz baseline;
    /// the first tick (and the first after `reset_clock`) uses zero
    /// elapsed time.
    pub fn render_frame(&mut self, timestamp: f64) {
        let elapsed = match self.last_tick {
            Some(last) => timestamp - last,
            None => 0.0,
        };
        self.last_tick = Some(timestamp);
        let time_scale = elapsed / FRAME_BASELINE_MS;

        self.surface.clear(self.size.width, self.size.height);

        let twinkle = self.cfg.twinkle;
        let height = self.size.height;
        for star in self.stars.iter_mut() {
            if twinkle {
                star.opacity = (star.base_opacity
                    + (timestamp * star.twinkle_freq + star.x).sin() * TWINKLE_AMPLITUDE)
                    .clamp(OPACITY_FLOOR, OPACITY_CEIL);
            }
            star.y -= star.speed * time_scale;
            if star.y < -WRAP_MARGIN {
                star.y = height + WRAP_MARGIN;
            }
            self.surface
                .fill_circle(star.x, star.y, star.radius, star.opacity);
        }

        let chance = self.cfg.shooting_chance;
        if self.rng.chance(chance) {
            self.spawn_shooting_star();
        }

        // Reverse order so in-place removal is safe.
        let mut i = self.shooting.len();
        while i > 0 {
            i -= 1;
            {
                let shot = &mut self.shooting[i];
                shot.x += shot.vx * time_scale;
                shot.y += shot.vy * time_scale;
                shot.life -= time_scale;
            }
            let shot = self.shooting[i];
            let tail_x = shot.x - shot.vx * TRAIL_LENGTH * TRAIL_SCALE;
            let tail_y = shot.y - shot.vy * TRAIL_LENGTH * TRAIL_SCALE;
            self.surface
                .stroke_trail(shot.x, shot.y, tail_x, tail_y, TRAIL_WIDTH);
            self.surface.fill_circle(shot.x, shot.y, HEAD_RADIUS, 1.0);

            if shot.life <= 0.0
                || shot.x > self.size.width + CULL_MARGIN
                || shot.y > self.size.height + CULL_MARGIN
            {
                self.shooting.remove(i);
            }
        }
    }
}
