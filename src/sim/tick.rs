//! Per-frame gameplay update for the playing state
//!
//! One call advances the session by `dt` seconds: basket input, difficulty,
//! spawning, movement, misses, catches, timers and the game-over check.

use super::collision::{resolve_catches, resolve_misses};
use super::entity::Steering;
use super::event::GameEvent;
use super::state::Session;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
}

impl TickInput {
    pub fn steering(&self) -> Steering {
        Steering {
            left: self.left,
            right: self.right,
        }
    }
}

/// Advance the session by `dt` seconds and report what happened
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.over {
        return events;
    }

    session.basket.update(input.steering(), dt, &session.config);

    session.game_time += dt;
    if session.ramp.update(dt, &session.config) {
        events.push(GameEvent::DifficultyIncreased {
            level: session.ramp.level,
        });
    }

    // Spawning
    session.spawn_elapsed_ms += dt * 1000.0;
    let speed = session.ramp.speed;
    if let Some(obj) = session.spawner.try_spawn(
        session.spawn_elapsed_ms,
        session.ramp.spawn_delay_ms,
        speed,
        &session.config,
    ) {
        session.objects.push(obj);
        if let Some(power_up) = session.spawner.try_power_up_spawn(
            session.config.power_up_spawn_chance,
            speed,
            &session.config,
        ) {
            session.power_ups.push(power_up);
        }
        session.spawn_elapsed_ms = 0.0;
    }

    // Movement
    let speed_multiplier = session.speed_multiplier();
    for obj in session.objects.iter_mut() {
        obj.update(dt, speed_multiplier, &session.config);
    }
    for power_up in session.power_ups.iter_mut() {
        power_up.update(dt, speed_multiplier, &session.config);
    }
    resolve_misses(session, &mut events);

    // Power-up countdown
    if let Some(active) = session.active_power_up.as_mut()
        && active.tick(dt)
    {
        let kind = active.kind;
        session.active_power_up = None;
        events.push(GameEvent::PowerUpExpired(kind));
    }

    resolve_catches(session, &mut events);

    session.score.update_combo_timer(dt);
    session.particles.update(dt, &session.config);

    if session.score.is_game_over() {
        session.over = true;
        log::info!(
            "Game over: score={}, best_combo={}, caught={}, missed={}",
            session.score.score,
            session.score.best_combo,
            session.objects_caught,
            session.objects_missed
        );
        events.push(GameEvent::GameOver {
            score: session.score.score,
        });
    }

    events
}

/// Demo-mode steering: chase the lowest catchable item, ignore bombs
pub fn autopilot(session: &Session) -> TickInput {
    let target = session
        .objects
        .iter()
        .filter(|o| !o.kind.is_bomb())
        .map(|o| (o.pos.y, o.center().x))
        .chain(session.power_ups.iter().map(|p| (p.pos.y, p.center().x)))
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, x)| x);

    let Some(target_x) = target else {
        return TickInput::default();
    };

    let dx = target_x - session.basket.center().x;
    let deadzone = session.basket.speed;
    TickInput {
        left: dx < -deadzone,
        right: dx > deadzone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{FallingObject, ObjectKind, PowerUpKind};
    use crate::tuning::GameConfig;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn session() -> Session {
        Session::new(GameConfig::default(), 12345, 0)
    }

    #[test]
    fn test_first_spawn_after_delay() {
        let mut s = session();
        let input = TickInput::default();
        for _ in 0..4 {
            tick(&mut s, &input, 0.25);
        }
        assert!(s.objects.is_empty());
        tick(&mut s, &input, 0.25);
        assert_eq!(s.objects.len(), 1);
        assert_eq!(s.spawn_elapsed_ms, 0.0);
    }

    #[test]
    fn test_slow_motion_halves_fall() {
        let mut s = session();
        s.objects.push(FallingObject::new(
            Vec2::new(0.0, 0.0),
            ObjectKind::Red,
            5.0,
            &s.config,
        ));
        s.activate_power_up(PowerUpKind::SlowMotion);
        tick(&mut s, &TickInput::default(), DT);
        assert!((s.objects[0].pos.y - 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_power_up_expires() {
        let mut s = session();
        s.activate_power_up(PowerUpKind::Shield);
        let mut expired = false;
        for _ in 0..301 {
            let events = tick(&mut s, &TickInput::default(), DT);
            if events.contains(&GameEvent::PowerUpExpired(PowerUpKind::Shield)) {
                expired = true;
            }
        }
        assert!(expired);
        assert!(s.active_power_up.is_none());
    }

    #[test]
    fn test_game_over_when_score_hits_zero() {
        let mut s = session();
        s.score.score = 1;
        let below = Vec2::new(0.0, s.config.screen_height);
        s.objects
            .push(FallingObject::new(below, ObjectKind::Green, 5.0, &s.config));
        let events = tick(&mut s, &TickInput::default(), DT);
        assert!(s.over);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 0 }));

        // Further ticks are inert
        assert!(tick(&mut s, &TickInput::default(), DT).is_empty());
    }

    #[test]
    fn test_difficulty_event() {
        let mut s = session();
        let events = tick(&mut s, &TickInput::default(), 10.0);
        assert!(events.contains(&GameEvent::DifficultyIncreased { level: 1 }));
    }

    #[test]
    fn test_basket_follows_input() {
        let mut s = session();
        let start = s.basket.pos.x;
        let input = TickInput {
            left: false,
            right: true,
        };
        tick(&mut s, &input, DT);
        assert!(s.basket.pos.x > start);
    }

    #[test]
    fn test_autopilot_steers_toward_lowest_object() {
        let mut s = session();
        s.objects.push(FallingObject::new(
            Vec2::new(10.0, 300.0),
            ObjectKind::Red,
            5.0,
            &s.config,
        ));
        s.objects.push(FallingObject::new(
            Vec2::new(1000.0, 100.0),
            ObjectKind::Red,
            5.0,
            &s.config,
        ));
        let input = autopilot(&s);
        assert!(input.left);
        assert!(!input.right);

        s.objects[0].kind = ObjectKind::Bomb;
        let input = autopilot(&s);
        assert!(input.right);
    }

    #[test]
    fn test_determinism() {
        let mut a = Session::new(GameConfig::default(), 99999, 0);
        let mut b = Session::new(GameConfig::default(), 99999, 0);

        for i in 0..900 {
            let input = TickInput {
                left: i % 120 < 60,
                right: i % 120 >= 60,
            };
            let ea = tick(&mut a, &input, DT);
            let eb = tick(&mut b, &input, DT);
            assert_eq!(ea, eb);
        }

        assert_eq!(a.objects.len(), b.objects.len());
        for (oa, ob) in a.objects.iter().zip(&b.objects) {
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.pos, ob.pos);
        }
        assert_eq!(a.score.score, b.score.score);
    }
}
