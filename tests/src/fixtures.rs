//! Shared fixture objects for the scenario files.
//!
//! A small game-asset model of the kind a scene audit guards: enemies
//! with tuned stats, spawners embedding a template, turrets tracking a
//! host-managed target, patrol routes chaining waypoints.

use std::rc::{Rc, Weak};

use vet_core::{Constraint, Field, Inspect, Value};

/// An enemy with tuned combat stats.
///
/// `name` must be non-empty, `hp` strictly positive, `speed`
/// non-negative.
pub struct Enemy {
    pub name: String,
    pub hp: f64,
    pub speed: f64,
}

impl Enemy {
    /// A well-formed enemy that passes every constraint.
    pub fn grunt() -> Self {
        Self {
            name: String::from("grunt"),
            hp: 40.0,
            speed: 1.5,
        }
    }
}

impl Inspect for Enemy {
    fn type_name(&self) -> &'static str {
        "Enemy"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const NAME: &[Constraint] = &[Constraint::NotEmpty];
        const HP: &[Constraint] = &[Constraint::GreaterThan(0.0)];
        const SPEED: &[Constraint] = &[Constraint::NotNegative];
        vec![
            Field::new("name", NAME, Value::Str(&self.name)),
            Field::new("hp", HP, Value::Float(self.hp)),
            Field::new("speed", SPEED, Value::Float(self.speed)),
        ]
    }
}

/// A spawner embedding an enemy template.
///
/// `template` is both required and validated as its own object.
pub struct Spawner {
    pub label: String,
    pub template: Option<Box<Enemy>>,
    pub capacity: i64,
    pub cooldown: f64,
}

impl Spawner {
    /// A well-formed spawner with a well-formed template.
    pub fn stocked() -> Self {
        Self {
            label: String::from("east-gate"),
            template: Some(Box::new(Enemy::grunt())),
            capacity: 3,
            cooldown: 12.0,
        }
    }
}

impl Inspect for Spawner {
    fn type_name(&self) -> &'static str {
        "Spawner"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const LABEL: &[Constraint] = &[Constraint::NotEmpty];
        const TEMPLATE: &[Constraint] = &[Constraint::RecurseInto, Constraint::NotNull];
        const CAPACITY: &[Constraint] = &[Constraint::GreaterThanOrEqual(1.0)];
        const COOLDOWN: &[Constraint] = &[Constraint::LessThan(60.0)];
        let template = match &self.template {
            Some(enemy) => Value::Object(enemy.as_ref()),
            None => Value::Null,
        };
        vec![
            Field::new("label", LABEL, Value::Str(&self.label)),
            Field::new("template", TEMPLATE, template),
            Field::new("capacity", CAPACITY, Value::Int(self.capacity)),
            Field::new("cooldown", COOLDOWN, Value::Float(self.cooldown)),
        ]
    }
}

/// A turret tracking a host-managed target.
///
/// The target handle goes dead when the tracked enemy is dropped.
pub struct Turret {
    pub target: Weak<Enemy>,
    pub arc: f64,
}

impl Turret {
    /// A turret locked onto the given target.
    pub fn tracking(target: &Rc<Enemy>) -> Self {
        Self {
            target: Rc::downgrade(target),
            arc: 90.0,
        }
    }
}

impl Inspect for Turret {
    fn type_name(&self) -> &'static str {
        "Turret"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const TARGET: &[Constraint] = &[Constraint::NotNull];
        const ARC: &[Constraint] = &[Constraint::LessThanOrEqual(360.0)];
        vec![
            Field::new("target", TARGET, Value::Handle(&self.target)),
            Field::new("arc", ARC, Value::Float(self.arc)),
        ]
    }
}

/// A linked chain of patrol waypoints.
pub struct PatrolRoute {
    pub name: String,
    pub next: Option<Box<PatrolRoute>>,
}

impl PatrolRoute {
    /// Build a route of `len` linked waypoints named `wp0` through
    /// `wp{len-1}`. `len` must be at least 1.
    pub fn chain(len: usize) -> Self {
        let mut route = Self {
            name: format!("wp{}", len - 1),
            next: None,
        };
        for i in (1..len).rev() {
            route = Self {
                name: format!("wp{}", i - 1),
                next: Some(Box::new(route)),
            };
        }
        route
    }
}

impl Inspect for PatrolRoute {
    fn type_name(&self) -> &'static str {
        "PatrolRoute"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const NAME: &[Constraint] = &[Constraint::NotEmpty];
        const NEXT: &[Constraint] = &[Constraint::RecurseInto];
        let next = match &self.next {
            Some(route) => Value::Object(route.as_ref()),
            None => Value::Null,
        };
        vec![
            Field::new("name", NAME, Value::Str(&self.name)),
            Field::new("next", NEXT, next),
        ]
    }
}

/// A camp holding a patrol route and a banner.
pub struct Camp {
    pub route: PatrolRoute,
    pub banner: String,
}

impl Inspect for Camp {
    fn type_name(&self) -> &'static str {
        "Camp"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const ROUTE: &[Constraint] = &[Constraint::RecurseInto];
        const BANNER: &[Constraint] = &[Constraint::NotEmpty];
        vec![
            Field::new("route", ROUTE, Value::Object(&self.route)),
            Field::new("banner", BANNER, Value::Str(&self.banner)),
        ]
    }
}

/// A potion whose strength carries two stacked bounds.
pub struct Potion {
    pub strength: f64,
    pub label: String,
}

impl Inspect for Potion {
    fn type_name(&self) -> &'static str {
        "Potion"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const STRENGTH: &[Constraint] = &[
            Constraint::NotNegative,
            Constraint::GreaterThanOrEqual(10.0),
        ];
        const LABEL: &[Constraint] = &[Constraint::NotEmpty];
        vec![
            Field::new("strength", STRENGTH, Value::Float(self.strength)),
            Field::new("label", LABEL, Value::Str(&self.label)),
        ]
    }
}

/// A text sign.
pub struct Sign {
    pub text: String,
}

impl Inspect for Sign {
    fn type_name(&self) -> &'static str {
        "Sign"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const TEXT: &[Constraint] = &[Constraint::NotEmpty];
        vec![Field::new("text", TEXT, Value::Str(&self.text))]
    }
}

/// A relay whose scalar channel was mistakenly tagged for descent.
pub struct Relay {
    pub channel: i64,
}

impl Inspect for Relay {
    fn type_name(&self) -> &'static str {
        "Relay"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const CHANNEL: &[Constraint] = &[Constraint::RecurseInto, Constraint::NotNegative];
        vec![Field::new("channel", CHANNEL, Value::Int(self.channel))]
    }
}

/// A gauge authored with a reading that is not a number.
pub struct BrokenGauge {
    pub reading: &'static str,
}

impl Inspect for BrokenGauge {
    fn type_name(&self) -> &'static str {
        "BrokenGauge"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        const READING: &[Constraint] = &[Constraint::GreaterThan(0.0)];
        vec![Field::new("reading", READING, Value::Str(self.reading))]
    }
}
