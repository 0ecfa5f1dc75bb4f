//! The simulated player and its kinematic state.
//!
//! Positions and velocities are `f64`; angles, fall distance and the pose
//! dimensions originate as `f32` and are widened where the reference
//! arithmetic widens them. The widening is deliberate and the exact widened
//! constants matter for reproducibility.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::collision::ShapeContext;
use crate::core::aabb::Aabb;
use crate::core::effects::EffectMap;
use crate::world::FluidKind;

/// Body pose, which drives the bounding box dimensions and eye height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pose {
    #[default]
    Standing,
    Sneaking,
    Swimming,
    Gliding,
}

impl Pose {
    /// Hitbox height. Standing and the prone poses are widened `f32`
    /// values; the sneaking height happens to be exact.
    pub fn height(self) -> f64 {
        match self {
            Pose::Standing => 1.8f32 as f64,
            Pose::Sneaking => 1.5,
            Pose::Swimming | Pose::Gliding => 0.6f32 as f64,
        }
    }

    /// Hitbox half width, identical across poses.
    pub fn half_width(self) -> f64 {
        0.3f32 as f64
    }

    /// Eye level above the feet.
    pub fn eye_height(self) -> f32 {
        match self {
            Pose::Standing => 1.62,
            Pose::Sneaking => 1.27,
            Pose::Swimming | Pose::Gliding => 0.4,
        }
    }
}

/// Creative-style capabilities that change how travel behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abilities {
    pub flying: bool,
}

/// Worn gear that participates in movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub elytra: bool,
    pub leather_boots: bool,
    /// Depth strider enchantment level on the boots.
    pub depth_strider: u32,
}

/// Full kinematic and status state of the simulated player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Degrees, positive turns clockwise when viewed from above.
    pub yaw: f32,
    /// Degrees, positive looks down.
    pub pitch: f32,
    pub pose: Pose,
    pub on_ground: bool,
    pub horizontal_collision: bool,
    pub fall_distance: f32,
    pub jump_cooldown: u32,
    pub sneaking: bool,
    pub sprinting: bool,
    /// Sprint state as of the end of the previous tick; air acceleration
    /// and jump boosts read this lagged copy.
    pub sprint_boost: bool,
    pub swimming: bool,
    pub gliding: bool,
    /// Height of water above the hitbox bottom, zero when dry.
    pub water_height: f64,
    pub lava_height: f64,
    /// The fluid the entity is considered to be in when touching both.
    pub primary_fluid: Option<FluidKind>,
    /// Whether the eyes were under water as of the previous tick's scan.
    pub eye_in_water: bool,
    pub eye_in_water_next: bool,
    /// Pending movement scale from cobweb-like contacts, consumed on move.
    pub movement_multiplier: DVec3,
    pub in_powder_snow: bool,
    pub ticks_frozen: u32,
    pub hurt_time: u32,
    /// Currently eating, drinking or drawing a bow; slows input and
    /// blocks sprint starts.
    pub using_item: bool,
    pub health: f32,
    /// Food level, sprinting needs more than six.
    pub hunger: u32,
    pub abilities: Abilities,
    pub equipment: Equipment,
    pub effects: EffectMap,
}

impl Player {
    pub fn new(position: DVec3) -> Player {
        Player {
            position,
            velocity: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            pose: Pose::Standing,
            on_ground: false,
            horizontal_collision: false,
            fall_distance: 0.0,
            jump_cooldown: 0,
            sneaking: false,
            sprinting: false,
            sprint_boost: false,
            swimming: false,
            gliding: false,
            water_height: 0.0,
            lava_height: 0.0,
            primary_fluid: None,
            eye_in_water: false,
            eye_in_water_next: false,
            movement_multiplier: DVec3::ZERO,
            in_powder_snow: false,
            ticks_frozen: 0,
            hurt_time: 0,
            using_item: false,
            health: 20.0,
            hunger: 20,
            abilities: Abilities::default(),
            equipment: Equipment::default(),
            effects: EffectMap::new(),
        }
    }

    /// Bounding box for an arbitrary pose at the current position.
    pub fn aabb_for(&self, pose: Pose) -> Aabb {
        let hw = pose.half_width();
        Aabb::from_coords(
            self.position.x - hw,
            self.position.y,
            self.position.z - hw,
            self.position.x + hw,
            self.position.y + pose.height(),
            self.position.z + hw,
        )
    }

    /// Bounding box in the current pose.
    pub fn aabb(&self) -> Aabb {
        self.aabb_for(self.pose)
    }

    /// World-space eye level.
    pub fn eye_y(&self) -> f64 {
        self.position.y + self.pose.eye_height() as f64
    }

    /// Block position of the feet.
    pub fn block_position(&self) -> IVec3 {
        IVec3::new(
            self.position.x.floor() as i32,
            self.position.y.floor() as i32,
            self.position.z.floor() as i32,
        )
    }

    /// Context for contextual block shapes such as powder snow.
    pub fn shape_context(&self) -> ShapeContext {
        ShapeContext {
            fall_distance: self.fall_distance,
            walks_on_powder_snow: self.equipment.leather_boots,
            descending: self.sneaking,
            feet_y: self.position.y,
        }
    }

    /// Whether the entity is touching any fluid.
    pub fn in_fluid(&self) -> bool {
        self.water_height > 0.0 || self.lava_height > 0.0
    }

    /// Ladder-style clamping applies only out of creative flight.
    pub fn is_climbing(&self, climbable_at_feet: bool) -> bool {
        climbable_at_feet && !self.abilities.flying
    }
}
