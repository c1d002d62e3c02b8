//! Basket collision tests and catch/miss resolution
//!
//! Every entity that hits the basket is resolved exactly once: it is removed
//! from the live set and exactly one outcome is applied.

use super::entity::{FallingObject, ObjectKind, PowerUp, PowerUpKind};
use super::event::GameEvent;
use super::rect::Rect;
use super::state::Session;
use crate::palette;

/// Particle burst multiplier for bombs
const BOMB_BURST: usize = 3;
/// Particle burst multiplier for power-ups
const POWER_UP_BURST: usize = 2;

/// Whether an entity rectangle overlaps the basket
#[inline]
pub fn basket_hit(basket: &Rect, entity: &Rect) -> bool {
    basket.intersects(entity)
}

/// Points factor for a catch: combo multiplier, doubled under double points
pub fn effective_multiplier(session: &Session) -> f32 {
    let mut multiplier = session.score.combo_multiplier();
    if session.has_power_up(PowerUpKind::DoublePoints) {
        multiplier *= PowerUpKind::DoublePoints.effect_value();
    }
    multiplier
}

/// Remove entities that fell past the bottom and apply miss penalties
pub fn resolve_misses(session: &mut Session, events: &mut Vec<GameEvent>) {
    let screen_height = session.config.screen_height;

    let (gone, live): (Vec<FallingObject>, Vec<FallingObject>) =
        std::mem::take(&mut session.objects)
            .into_iter()
            .partition(|o| o.is_off_screen(screen_height));
    session.objects = live;

    for obj in gone {
        // Dodged bombs are free
        if obj.kind.is_bomb() {
            continue;
        }
        apply_miss(session, obj.kind, events);
    }

    session
        .power_ups
        .retain(|p| !p.is_off_screen(screen_height));
}

/// A non-bomb object left the screen uncaught
pub fn apply_miss(session: &mut Session, kind: ObjectKind, events: &mut Vec<GameEvent>) {
    let shielded = session.has_power_up(PowerUpKind::Shield);
    if !shielded {
        session.score.subtract_points(session.config.miss_penalty);
    }
    session.objects_missed += 1;
    events.push(GameEvent::Missed {
        kind,
        penalized: !shielded,
    });
}

/// Test the basket against every live object and power-up
pub fn resolve_catches(session: &mut Session, events: &mut Vec<GameEvent>) {
    let basket = session.basket.rect();

    let (hit, live): (Vec<FallingObject>, Vec<FallingObject>) =
        std::mem::take(&mut session.objects)
            .into_iter()
            .partition(|o| basket_hit(&basket, &o.rect()));
    session.objects = live;

    for obj in hit {
        if obj.kind.is_bomb() {
            catch_bomb(session, &obj, events);
        } else {
            catch_object(session, &obj, events);
        }
    }

    let (hit, live): (Vec<PowerUp>, Vec<PowerUp>) = std::mem::take(&mut session.power_ups)
        .into_iter()
        .partition(|p| basket_hit(&basket, &p.rect()));
    session.power_ups = live;

    for power_up in hit {
        catch_power_up(session, &power_up, events);
    }
}

fn catch_bomb(session: &mut Session, obj: &FallingObject, events: &mut Vec<GameEvent>) {
    let damage = session.config.bomb_damage;
    session.score.subtract_points(damage);
    session.score.reset_combo();
    session.objects_missed += 1;

    let count = session.config.particle_count * BOMB_BURST;
    emit_burst(session, obj.rect(), palette::EXPLOSION, count);
    events.push(GameEvent::BombCaught { damage });
}

fn catch_object(session: &mut Session, obj: &FallingObject, events: &mut Vec<GameEvent>) {
    let multiplier = effective_multiplier(session);
    let points = session.score.add_points(obj.kind.points(), multiplier);
    session.objects_caught += 1;

    let count = session.config.particle_count;
    emit_burst(session, obj.rect(), obj.kind.color(), count);
    events.push(GameEvent::Caught {
        kind: obj.kind,
        points,
        combo: session.score.combo,
    });
}

fn catch_power_up(session: &mut Session, power_up: &PowerUp, events: &mut Vec<GameEvent>) {
    session.activate_power_up(power_up.kind);

    let count = session.config.particle_count * POWER_UP_BURST;
    emit_burst(session, power_up.rect(), power_up.kind.color(), count);
    events.push(GameEvent::PowerUpCollected(power_up.kind));
}

fn emit_burst(session: &mut Session, at: Rect, color: palette::Color, count: usize) {
    if session.particles_enabled {
        session
            .particles
            .emit(at.center(), color, count, &session.config);
    }
}
