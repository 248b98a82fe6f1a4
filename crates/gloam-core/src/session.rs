//! The scene session: one room's world plus the controller that runs it.
//!
//! A session is built once for a room, driven by `update(dt)` every
//! frame, and disposed exactly once when the router leaves the room.
//! Input arrives as intents (pointer, clicks, held keys, wheel); the
//! session folds them into locomotion, door toggles, panel and
//! navigation events, and a camera pose the host reads back. Everything
//! renderer-shaped that the build allocated is released through the
//! ledger at teardown, and the report has to balance.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use image::RgbaImage;

use gloam_logic::content::{ManorContent, RoomKey};
use gloam_logic::ease;
use gloam_logic::tap::{DragGate, TapTracker, DOUBLE_WINDOW_MS, DRAG_SLOP_PX, EXTERIOR_WINDOW_MS};
use gloam_logic::tiers::TierSettings;
use gloam_logic::trigger::{EdgeLatch, TriggerEdge};
use gloam_logic::walk::{self, Glide, HeldKeys};

use crate::build::{build_room, BuildCtx, CameraStation, RoomRig, ScreenRig};
use crate::components::{Allocated, Clickable, DoorPivot, Surface, TargetAction, Vec3};
use crate::events::{EventQueue, SessionEvent};
use crate::ledger::{DisposeReport, ResourceId, ResourceKind, ResourceLedger};
use crate::pick::{pick_nearest, Ray};
use crate::systems::{bob_system, door_system, drift_system, flicker_system, portal_system, sway_system};
use crate::textures::TextureFactory;

/// Longest frame the controller will integrate. Anything slower (a
/// background tab waking up) is treated as one slow frame, not a jump.
const MAX_FRAME_DT: f32 = 0.1;

/// Camera pose the host applies verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub pos: Vec3,
    pub look: Vec3,
}

/// One room, alive: world, resources, camera, interaction state.
pub struct SceneSession {
    world: World,
    ledger: ResourceLedger,
    images: BTreeMap<ResourceId, RgbaImage>,
    factory: TextureFactory,
    rig: RoomRig,
    content: ManorContent,
    events: EventQueue,

    clock: f32,
    active: bool,
    dispose_report: Option<DisposeReport>,

    // Camera integration state and the pose handed to the host.
    eased_pos: Vec3,
    eased_look: Vec3,
    camera: CameraRig,

    // Pointer look (walk rooms) and facade parallax targets.
    look_x: f32,
    look_y: f32,
    drag_base: Option<(f32, f32)>,
    parallax_x: f32,
    parallax_y: f32,

    // Locomotion.
    keys: HeldKeys,
    glide: Glide,
    walk_x: f32,
    walk_z: f32,
    climb: f32,

    // Interaction.
    taps: TapTracker,
    drag_gate: DragGate,
    panel_open: bool,
    item_index: usize,
    summit_latch: EdgeLatch,
}

impl SceneSession {
    /// Build the room and stand the controller up at its spawn pose.
    pub fn build(room: RoomKey, settings: &TierSettings, content: &ManorContent) -> Self {
        let mut world = World::new();
        let mut ledger = ResourceLedger::new();
        let mut images = BTreeMap::new();

        let mut ctx = BuildCtx {
            world: &mut world,
            ledger: &mut ledger,
            images: &mut images,
            factory: TextureFactory::new(settings.texture_scale),
            settings: *settings,
            content,
        };
        let rig = build_room(&mut ctx, room);
        let factory = ctx.factory;

        log::info!(
            "session {:?} built: {} entities, {} resources, tier {:?}",
            room,
            world.len(),
            ledger.created_count(),
            settings.tier
        );

        let window_ms = if room == RoomKey::Exterior {
            EXTERIOR_WINDOW_MS
        } else {
            DOUBLE_WINDOW_MS
        };

        Self {
            world,
            ledger,
            images,
            factory,
            content: content.clone(),
            events: EventQueue::default(),
            clock: 0.0,
            active: true,
            dispose_report: None,
            eased_pos: rig.spawn.pos,
            eased_look: rig.spawn.look_at,
            camera: CameraRig { pos: rig.spawn.pos, look: rig.spawn.look_at },
            look_x: 0.0,
            look_y: 0.0,
            drag_base: None,
            parallax_x: 0.0,
            parallax_y: 0.0,
            keys: HeldKeys::default(),
            glide: Glide::default(),
            walk_x: rig.spawn.pos.x,
            walk_z: rig.spawn.pos.z,
            climb: 0.0,
            taps: TapTracker::new(window_ms),
            drag_gate: DragGate::default(),
            panel_open: false,
            item_index: 0,
            summit_latch: EdgeLatch::default(),
            rig,
        }
    }

    /// One frame. Bookkeeping (swings, flicker, sway, particles) always
    /// advances; locomotion and the camera only while the session is
    /// active, so a warm-standby room neither walks nor fires portals.
    pub fn update(&mut self, dt: f32) {
        if self.dispose_report.is_some() {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.clock += dt;

        door_system(&mut self.world);
        flicker_system(&mut self.world, self.clock);
        sway_system(&mut self.world, self.clock);
        bob_system(&mut self.world, self.clock);
        drift_system(&mut self.world, self.clock, dt);

        if !self.active {
            return;
        }

        if self.rig.wasd {
            self.walk_frame();
        } else if self.rig.parallax {
            self.facade_frame();
        } else {
            self.showcase_frame();
        }
    }

    /// Held-key walking, glide, stairs, portals, and the walk camera.
    fn walk_frame(&mut self) {
        let (mut x, mut z) = walk::walk_step(self.walk_x, self.walk_z, self.keys, self.look_x);
        z -= self.glide.step();
        if let Some(bounds) = self.rig.bounds {
            let clamped = bounds.clamp(x, z);
            x = clamped.0;
            z = clamped.1;
        }
        self.walk_x = x;
        self.walk_z = z;

        self.climb = self.rig.stairs.map_or(0.0, |run| run.climb_offset(x, z));
        if let (Some(run), Some(dest)) = (self.rig.stairs, self.rig.stair_destination) {
            if self.summit_latch.sample(run.at_summit(x, z)) == TriggerEdge::Entered {
                self.events.emit(SessionEvent::EnterRoom(dest));
            }
        }

        portal_system(&mut self.world, x, z, self.panel_open, &mut self.events);

        let mut pos = self.eased_pos;
        pos.x = ease::approach(
            pos.x,
            x + self.look_x * walk::LOOK_SIDE_BIAS,
            walk::CAMERA_SMOOTHING,
        );
        pos.y = ease::approach(
            pos.y,
            self.rig.eye_height + self.climb + self.look_y * walk::LOOK_HEIGHT_BIAS,
            walk::CAMERA_SMOOTHING,
        );
        pos.z = ease::approach(pos.z, z, walk::CAMERA_SMOOTHING);
        let look = Vec3::new(
            pos.x + self.look_x * walk::LOOK_POINT_X_GAIN,
            self.rig.spawn.look_at.y
                + self.climb * walk::CLIMB_LOOK_FACTOR
                + self.look_y * walk::LOOK_POINT_Y_GAIN,
            pos.z + walk::LOOK_AHEAD_Z,
        );
        self.eased_pos = pos;
        self.eased_look = look;
        self.camera = CameraRig { pos, look };
    }

    /// Facade parallax plus the scroll dolly toward the door.
    fn facade_frame(&mut self) {
        let advance = self.glide.step();
        if let Some((z_min, z_max)) = self.rig.glide_z {
            self.walk_z = (self.walk_z - advance).clamp(z_min, z_max);
        }

        portal_system(
            &mut self.world,
            self.eased_pos.x,
            self.walk_z,
            self.panel_open,
            &mut self.events,
        );

        let base = self.rig.spawn.pos;
        let mut pos = self.eased_pos;
        pos.x = ease::approach(pos.x, base.x + self.parallax_x, walk::PARALLAX_EASE);
        pos.y = ease::approach(pos.y, base.y + self.parallax_y, walk::PARALLAX_EASE);
        pos.z = ease::approach(pos.z, self.walk_z, walk::CAMERA_SMOOTHING);
        self.eased_pos = pos;
        self.eased_look = self.rig.spawn.look_at;
        self.camera = CameraRig { pos, look: self.rig.spawn.look_at };
    }

    /// Autonomous chamber camera: ease to the focused station, then lay
    /// the idle sway on top of the eased pose.
    fn showcase_frame(&mut self) {
        let (station, pos_ease, look_ease, sway_x, sway_y, look_sway_x) =
            match &self.rig.showcase {
                Some(showcase) => {
                    let last = showcase.stations.len().saturating_sub(1);
                    let station: CameraStation =
                        match showcase.stations.get(self.item_index.min(last)) {
                            Some(station) => *station,
                            None => return,
                        };
                    (
                        station,
                        showcase.pos_ease,
                        showcase.look_ease,
                        showcase.sway_x,
                        showcase.sway_y,
                        showcase.look_sway_x,
                    )
                }
                None => return,
            };

        let mut pos = self.eased_pos;
        let mut look = self.eased_look;
        pos.x = ease::approach(pos.x, station.pos.x, pos_ease);
        pos.y = ease::approach(pos.y, station.pos.y, pos_ease);
        pos.z = ease::approach(pos.z, station.pos.z, pos_ease);
        look.x = ease::approach(look.x, station.look.x, look_ease);
        look.y = ease::approach(look.y, station.look.y, look_ease);
        look.z = ease::approach(look.z, station.look.z, look_ease);
        self.eased_pos = pos;
        self.eased_look = look;

        let t = self.clock;
        let mut cam_pos = pos;
        let mut cam_look = look;
        if sway_x.0 > 0.0 {
            cam_pos.x += (t * sway_x.1).sin() * sway_x.0;
        }
        if sway_y.0 > 0.0 {
            cam_pos.y += (t * sway_y.1).sin() * sway_y.0;
        }
        if look_sway_x.0 > 0.0 {
            cam_look.x += (t * look_sway_x.1).sin() * look_sway_x.0;
        }
        self.camera = CameraRig { pos: cam_pos, look: cam_look };
    }

    /// Resolve a click ray against the clickable targets. Double
    /// activation is decided per target identity inside the room's
    /// window; clicks right after a drag are dropped.
    pub fn click(&mut self, ray: Ray, now_ms: u64) {
        if self.dispose_report.is_some() || !self.drag_gate.allows_click(now_ms) {
            return;
        }
        let hit = match pick_nearest(&self.world, &ray) {
            Some(hit) => hit,
            None => return,
        };
        let action = match self.world.get::<&Clickable>(hit.entity) {
            Ok(clickable) => clickable.action,
            Err(_) => return,
        };
        let double = self.taps.register(hit.entity.to_bits().get(), now_ms);

        match action {
            TargetAction::ToggleDoor(pivot) => self.door_clicked(pivot, double),
            TargetAction::OpenPanel(key) => {
                if double {
                    if let Some(room) = key.room() {
                        self.events.emit(SessionEvent::EnterRoom(room));
                        return;
                    }
                }
                self.panel_open = true;
                self.events.emit(SessionEvent::OpenPanel(key));
            }
            TargetAction::Floor => {
                if double {
                    let (x, z) = match self.rig.bounds {
                        Some(bounds) => bounds.clamp(hit.point.x, hit.point.z),
                        None => (hit.point.x, hit.point.z),
                    };
                    self.walk_x = x;
                    self.walk_z = z;
                }
            }
            TargetAction::Navigate(room) => {
                self.events.emit(SessionEvent::EnterRoom(room));
            }
            TargetAction::SelectItem(index) => self.focus_item(index),
        }
    }

    fn door_clicked(&mut self, pivot: Entity, double: bool) {
        let mut door = match self.world.get::<&mut DoorPivot>(pivot) {
            Ok(door) => door,
            Err(_) => return,
        };
        if double && door.swing.is_open {
            if let Some(room) = door.leads_to {
                self.events.emit(SessionEvent::EnterRoom(room));
                return;
            }
        }
        let _ = door.swing.toggle();
    }

    /// True when the ray rests on any clickable; the host switches the
    /// cursor on this.
    pub fn hover(&self, ray: Ray) -> bool {
        pick_nearest(&self.world, &ray).is_some()
    }

    /// Pointer position in NDC. Walk rooms turn it into the look
    /// offsets; facade rooms into the parallax target.
    pub fn pointer_moved(&mut self, ndc_x: f32, ndc_y: f32) {
        if self.rig.parallax {
            self.parallax_x = ndc_x * walk::PARALLAX_GAIN;
            self.parallax_y = ndc_y * walk::PARALLAX_GAIN;
        } else {
            self.look_x = ndc_x * walk::LOOK_X_GAIN;
            self.look_y = ndc_y * walk::LOOK_Y_GAIN;
        }
    }

    /// Anchor a touch-look drag at the current look.
    pub fn drag_begin(&mut self) {
        self.drag_base = Some((self.look_x, self.look_y));
    }

    /// Drag travel as a fraction of the host surface, plus the raw pixel
    /// travel for the slop check.
    pub fn drag_move(&mut self, dx_frac: f32, dy_frac: f32, travel_px: f32, now_ms: u64) {
        let (base_x, base_y) = match self.drag_base {
            Some(base) => base,
            None => return,
        };
        self.look_x =
            (base_x + dx_frac * walk::DRAG_X_GAIN).clamp(-walk::DRAG_X_CLAMP, walk::DRAG_X_CLAMP);
        self.look_y =
            (base_y + dy_frac * walk::DRAG_Y_GAIN).clamp(-walk::DRAG_Y_CLAMP, walk::DRAG_Y_CLAMP);
        if travel_px > DRAG_SLOP_PX {
            self.drag_gate.note_drag(now_ms);
        }
    }

    pub fn drag_end(&mut self) {
        self.drag_base = None;
    }

    /// Wheel delta feeds the glide (walk rooms) or the dolly (facade).
    pub fn wheel(&mut self, delta: f32) {
        self.glide.push(delta);
    }

    pub fn set_held(&mut self, keys: HeldKeys) {
        self.keys = keys;
    }

    /// Warm standby: an inactive session keeps animating but ignores
    /// locomotion and never fires portals. Held keys drop so nothing
    /// sticks across the switch back.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.keys = HeldKeys::default();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The host reports the overlay state back; portals stay disarmed
    /// while a panel is up.
    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Focus a content item: swaps the screen raster where the room has
    /// one, otherwise re-targets the showcase camera.
    pub fn focus_item(&mut self, index: usize) {
        if let Some(screen) = self.rig.screen {
            if screen.total == 0 {
                return;
            }
            let index = index % screen.total;
            if index != self.item_index {
                self.swap_screen(screen, index);
            }
            self.item_index = index;
            return;
        }
        if let Some(showcase) = &self.rig.showcase {
            if !showcase.stations.is_empty() {
                self.item_index = index % showcase.stations.len();
            }
        }
    }

    /// Arrow-key style prev/next across the room's items, wrapping.
    pub fn step_item(&mut self, delta: i32) {
        let total = match self.rig.screen {
            Some(screen) => screen.total,
            None => self.rig.showcase.as_ref().map_or(0, |s| s.stations.len()),
        };
        if total == 0 {
            return;
        }
        let next = (self.item_index as i64 + delta as i64).rem_euclid(total as i64) as usize;
        self.focus_item(next);
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    fn swap_screen(&mut self, screen: ScreenRig, index: usize) {
        let image = match self.rig.room {
            RoomKey::Archive => match self.content.archive.get(index) {
                Some(entry) => self.factory.slide(
                    entry,
                    &self.content.archive_panel.accent,
                    index,
                    screen.total,
                ),
                None => return,
            },
            RoomKey::Vault => match self.content.vault.get(index) {
                Some(entry) => self.factory.hologram(
                    entry,
                    &self.content.vault_panel.accent,
                    index,
                    screen.total,
                ),
                None => return,
            },
            _ => return,
        };
        self.swap_texture(screen.entity, image);
    }

    /// The portrait arrived from disk; swap it onto the hall frame.
    pub fn set_portrait_image(&mut self, image: RgbaImage) {
        let portrait = match self.rig.portrait {
            Some(entity) => entity,
            None => return,
        };
        self.swap_texture(portrait, image);
    }

    /// Retire one surface's texture for a fresh one, releasing the old
    /// id so the teardown balance still holds.
    fn swap_texture(&mut self, entity: Entity, image: RgbaImage) {
        let id = self.ledger.create(ResourceKind::Texture);
        self.images.insert(id, image);
        let old = match self.world.get::<&mut Surface>(entity) {
            Ok(mut surface) => surface.texture.replace(id),
            Err(_) => {
                self.images.remove(&id);
                self.ledger.release(id);
                return;
            }
        };
        if let Some(old) = old {
            self.ledger.release(old);
            self.images.remove(&old);
        }
    }

    /// Host back action (Escape). Queued like any other navigation so
    /// the router stays the only authority on room switches.
    pub fn request_exit(&mut self) {
        if self.dispose_report.is_some() {
            return;
        }
        self.events.emit(SessionEvent::ExitRoom);
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    /// Tear the room down: release every per-entity allocation, then
    /// whatever shared ids (sheet textures) remain live, and empty the
    /// world. Idempotent; repeat calls return the first report.
    pub fn dispose(&mut self) -> DisposeReport {
        if let Some(report) = self.dispose_report {
            return report;
        }

        let mut ids = Vec::new();
        for (_, allocated) in self.world.query::<&Allocated>().iter() {
            ids.push(allocated.geometry);
            ids.push(allocated.material);
        }
        for id in ids {
            self.ledger.release(id);
        }
        for id in self.ledger.live_ids() {
            self.ledger.release(id);
        }

        self.world.clear();
        self.images.clear();
        self.active = false;

        let report = self.ledger.report();
        if report.balanced() {
            log::info!("session {:?} disposed: {report}", self.rig.room);
        } else {
            log::warn!("session {:?} disposed unbalanced: {report}", self.rig.room);
        }
        self.dispose_report = Some(report);
        report
    }

    pub fn is_disposed(&self) -> bool {
        self.dispose_report.is_some()
    }

    // Host read-back.

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn images(&self) -> &BTreeMap<ResourceId, RgbaImage> {
        &self.images
    }

    pub fn rig(&self) -> &RoomRig {
        &self.rig
    }

    pub fn camera(&self) -> CameraRig {
        self.camera
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Current walk target after clamping.
    pub fn walk_position(&self) -> (f32, f32) {
        (self.walk_x, self.walk_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloam_logic::tiers::PerfTier;

    fn low_tier() -> TierSettings {
        TierSettings::for_tier(PerfTier::Low)
    }

    fn hall() -> SceneSession {
        SceneSession::build(RoomKey::Hall, &low_tier(), &ManorContent::default())
    }

    fn down_ray_at(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 5.0, z), Vec3::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_build_starts_at_spawn_pose() {
        let session = hall();
        let cam = session.camera();
        assert_eq!(cam.pos, session.rig().spawn.pos);
        assert_eq!(cam.look, session.rig().spawn.look_at);
    }

    #[test]
    fn test_walk_forward_moves_negative_z() {
        let mut session = hall();
        let (_, z0) = session.walk_position();
        session.set_held(HeldKeys { forward: true, ..Default::default() });
        for _ in 0..30 {
            session.update(1.0 / 60.0);
        }
        let (_, z1) = session.walk_position();
        assert!(z1 < z0 - 1.0);
    }

    #[test]
    fn test_walk_clamps_to_bounds() {
        let mut session = hall();
        session.set_held(HeldKeys { back: true, ..Default::default() });
        for _ in 0..600 {
            session.update(1.0 / 60.0);
        }
        let (_, z) = session.walk_position();
        let bounds = session.rig().bounds.unwrap();
        assert!(z <= bounds.near - 0.5 + 1e-4);
    }

    #[test]
    fn test_inactive_session_does_not_walk() {
        let mut session = hall();
        session.set_held(HeldKeys { forward: true, ..Default::default() });
        session.set_active(false);
        let before = session.walk_position();
        for _ in 0..30 {
            session.update(1.0 / 60.0);
        }
        assert_eq!(before, session.walk_position());
        // The clock still runs for bookkeeping.
        assert!(session.clock() > 0.4);
    }

    #[test]
    fn test_double_click_floor_teleports() {
        let mut session = hall();
        let before = session.walk_position();
        let ray = down_ray_at(2.0, -6.0);
        session.click(ray, 1_000);
        assert_eq!(before, session.walk_position(), "single click must not move");
        session.click(ray, 1_200);
        let (x, z) = session.walk_position();
        assert!((x - 2.0).abs() < 0.7);
        assert!((z + 6.0).abs() < 1.4);
    }

    #[test]
    fn test_click_after_drag_is_suppressed() {
        let mut session = hall();
        session.drag_begin();
        session.drag_move(0.2, 0.0, 40.0, 1_000);
        session.drag_end();
        let before = session.walk_position();
        let ray = down_ray_at(2.0, -6.0);
        session.click(ray, 1_050);
        session.click(ray, 1_100);
        assert_eq!(before, session.walk_position());
    }

    #[test]
    fn test_drag_look_clamps() {
        let mut session = hall();
        session.drag_begin();
        session.drag_move(40.0, -40.0, 500.0, 10);
        assert!(session.look_x <= walk::DRAG_X_CLAMP && session.look_x >= -walk::DRAG_X_CLAMP);
        assert!(session.look_y <= walk::DRAG_Y_CLAMP && session.look_y >= -walk::DRAG_Y_CLAMP);
    }

    #[test]
    fn test_stair_summit_enters_gallery_once() {
        let mut session = hall();
        // Drop the walker straight onto the summit region.
        session.walk_x = session.rig().bounds.unwrap().right - 1.0;
        session.walk_z = -5.5;
        session.update(1.0 / 60.0);
        let events = session.drain_events();
        assert_eq!(events, vec![SessionEvent::EnterRoom(RoomKey::Gallery)]);
        // Lingering at the summit does not fire again.
        session.update(1.0 / 60.0);
        assert!(session.drain_events().is_empty());
        assert!(session.climb > 3.0);
    }

    #[test]
    fn test_exit_request_queues_event() {
        let mut session = hall();
        session.request_exit();
        assert_eq!(session.drain_events(), vec![SessionEvent::ExitRoom]);
        session.dispose();
        session.request_exit();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_dispose_balances_and_is_idempotent() {
        let mut session = hall();
        session.update(1.0 / 60.0);
        let report = session.dispose();
        assert!(report.balanced(), "unbalanced: {report}");
        assert_eq!(session.dispose(), report);
        assert!(session.is_disposed());
        assert_eq!(session.world().len(), 0);
    }

    #[test]
    fn test_screen_swap_keeps_ledger_balanced() {
        let mut session =
            SceneSession::build(RoomKey::Archive, &low_tier(), &ManorContent::default());
        let total = session.rig().screen.unwrap().total;
        assert!(total > 1);
        session.step_item(1);
        assert_eq!(session.item_index(), 1);
        session.step_item(-2);
        assert_eq!(session.item_index(), total - 1);
        let report = session.dispose();
        assert!(report.balanced(), "unbalanced after swaps: {report}");
    }

    #[test]
    fn test_portrait_swap_keeps_ledger_balanced() {
        let mut session = hall();
        session.set_portrait_image(RgbaImage::new(4, 4));
        session.set_portrait_image(RgbaImage::new(4, 4));
        let report = session.dispose();
        assert!(report.balanced(), "unbalanced after portrait: {report}");
    }

    #[test]
    fn test_showcase_camera_eases_toward_station() {
        let mut session =
            SceneSession::build(RoomKey::Gallery, &low_tier(), &ManorContent::default());
        let station = session.rig().showcase.as_ref().unwrap().stations[0];
        for _ in 0..600 {
            session.update(1.0 / 60.0);
        }
        let cam = session.camera();
        assert!((cam.pos.x - station.pos.x).abs() < 0.1);
        assert!((cam.pos.z - station.pos.z).abs() < 0.1);
    }

    #[test]
    fn test_select_item_retargets_showcase() {
        let mut session =
            SceneSession::build(RoomKey::Gallery, &low_tier(), &ManorContent::default());
        let stations = session.rig().showcase.as_ref().unwrap().stations.clone();
        assert!(stations.len() > 1);
        session.focus_item(1);
        for _ in 0..600 {
            session.update(1.0 / 60.0);
        }
        let cam = session.camera();
        assert!((cam.pos.x - stations[1].pos.x).abs() < 0.1);
    }
}
