//! Gloam Viewer - Bevy host for the manor scene sessions
//!
//! The session engine owns the rooms; this binary feeds it pointer and
//! key intents, mirrors its hecs world into Bevy meshes and lights once
//! per build, applies the controller camera every frame, and swaps
//! sessions when the router drains a navigation event.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::math::Affine2;
use bevy::pbr::{DirectionalLightShadowMap, DistanceFog, FogFalloff, PointLightShadowMap};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::{PrimaryWindow, SystemCursorIcon, WindowFocused};
use bevy::winit::cursor::CursorIcon;

use gloam_core::assets::portrait_or_placeholder;
use gloam_core::build::RoomRig;
use gloam_core::components::{
    Aim, DriftParticles, LightKind, LightRig, Placement, PropShape, Surface, Vec3 as SceneVec3,
};
use gloam_core::config::ViewerConfig;
use gloam_core::events::SessionEvent;
use gloam_core::ledger::ResourceId;
use gloam_core::pick::Ray;
use gloam_core::session::SceneSession;
use gloam_core::textures::TextureFactory;
use gloam_logic::color::Rgb8;
use gloam_logic::content::{ManorContent, PanelKey, RoomKey};
use gloam_logic::tiers::{initial_tier, FpsGovernor, StartupProbe, TierSettings, NARROW_VIEWPORT};
use gloam_logic::walk::HeldKeys;

const CONFIG_PATH: &str = "gloam.json";

// Scene light units to Bevy photometric units.
const POINT_LUMENS: f32 = 60_000.0;
const SPOT_LUMENS: f32 = 160_000.0;
const SUN_LUX: f32 = 400.0;
const AMBIENT_LUX: f32 = 40.0;

/// One wheel line in glide pixels.
const SCROLL_LINE_PX: f32 = 40.0;
/// Parallax height applied to bump-carrying surfaces.
const BUMP_DEPTH: f32 = 0.04;
/// Room-switch veil fade, alpha per second.
const FADE_RATE: f32 = 2.2;

fn main() {
    let config = match ViewerConfig::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ignoring {}: {}", CONFIG_PATH, e);
            ViewerConfig::default()
        }
    };
    let content = config.load_content();
    let tier = match config.tier {
        Some(tier) => tier,
        None => initial_tier(&StartupProbe {
            viewport_width: config.window_width,
            coarse_pointer: false,
        }),
    };
    let settings = TierSettings::for_tier(tier);
    let session = SceneSession::build(RoomKey::Exterior, &settings, &content);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Blackwood Manor".to_string(),
                resolution: (config.window_width, config.window_height).into(),
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(bevy::diagnostic::FrameTimeDiagnosticsPlugin::default())
        .add_plugins(bevy::diagnostic::LogDiagnosticsPlugin::default())
        .insert_resource(PointLightShadowMap { size: settings.shadow_map_size as usize })
        .insert_resource(DirectionalLightShadowMap { size: settings.shadow_map_size as usize })
        .insert_resource(SceneWrapper(session))
        .insert_resource(Router { current: RoomKey::Exterior, pending: None })
        .insert_resource(Quality { settings, governor: FpsGovernor::new() })
        .insert_resource(Manor(content))
        .insert_resource(HostConfig(config))
        .insert_resource(PanelState::default())
        .insert_resource(PointerDrag::default())
        .insert_resource(TextureCache::default())
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                drive_session,
                window_focus,
                pointer_input,
                wheel_input,
                key_commands,
                route_events,
                rebuild_scene,
                sync_props,
                sync_lights,
                draw_particles,
                apply_stage_look,
                update_panel,
                update_hint,
                fade_veil,
            ),
        )
        .run();
}

#[derive(Resource)]
struct SceneWrapper(SceneSession);

#[derive(Resource)]
struct Router {
    current: RoomKey,
    pending: Option<RoomKey>,
}

#[derive(Resource)]
struct Quality {
    settings: TierSettings,
    governor: FpsGovernor,
}

#[derive(Resource)]
struct Manor(ManorContent);

#[derive(Resource)]
struct HostConfig(ViewerConfig);

#[derive(Resource, Default)]
struct PanelState {
    open: Option<PanelKey>,
    shown: Option<PanelKey>,
}

#[derive(Resource, Default)]
struct PointerDrag {
    pressed: bool,
    origin: Vec2,
    last: Vec2,
    travel: f32,
}

/// Bevy image handles backing session texture ids, filled lazily and
/// dropped wholesale on every room switch.
#[derive(Resource, Default)]
struct TextureCache(HashMap<ResourceId, Handle<Image>>);

/// Bevy twin of one session prop. The cached fields detect texture
/// swaps and opacity animation without touching materials every frame.
#[derive(Component)]
struct PropMirror {
    source: hecs::Entity,
    texture: Option<ResourceId>,
    opacity: f32,
}

#[derive(Component)]
struct LightMirror(hecs::Entity);

#[derive(Component)]
struct PanelRoot;

#[derive(Component)]
struct HintText;

/// Full-window black overlay; rebuilds snap it opaque and it fades out.
#[derive(Component)]
struct FadeVeil;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut image_assets: ResMut<Assets<Image>>,
    mut cache: ResMut<TextureCache>,
    scene: Res<SceneWrapper>,
) {
    let camera = scene.0.camera();
    let rig = scene.0.rig();

    commands.spawn((
        Camera3d::default(),
        Msaa::Sample4,
        Transform::from_translation(vec3(camera.pos)).looking_at(vec3(camera.look), Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: rig.fov_wide.to_radians(),
            ..default()
        }),
        fog_for(rig),
    ));

    commands.spawn((
        Text::new(""),
        TextFont { font_size: 13.0, ..default() },
        TextColor(Color::srgba(0.85, 0.8, 0.72, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(10.0),
            ..default()
        },
        HintText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::BLACK),
        GlobalZIndex(10),
        FadeVeil,
    ));

    spawn_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut image_assets,
        &mut cache,
        &scene.0,
    );

    info!("viewer up, standing in {:?}", rig.room);
}

/// Held keys in, one controller frame out. The governor samples the same
/// dt; a downgrade only ever lands on the next room build.
fn drive_session(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<SceneWrapper>,
    mut quality: ResMut<Quality>,
) {
    let dt = time.delta_secs();
    scene.0.set_held(HeldKeys {
        forward: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
        back: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::KeyD),
    });
    scene.0.update(dt);

    let tier = quality.settings.tier;
    if let Some(next) = quality.governor.note_frame(dt, tier) {
        quality.settings = TierSettings::for_tier(next);
        info!("frame rate strained, next room builds at {:?}", next);
    }
}

/// Warm standby while the window is unfocused: animation continues,
/// locomotion and portals stop.
fn window_focus(mut events: EventReader<WindowFocused>, mut scene: ResMut<SceneWrapper>) {
    for event in events.read() {
        scene.0.set_active(event.focused);
    }
}

fn pointer_input(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<(Entity, &Window), With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut drag: ResMut<PointerDrag>,
    mut scene: ResMut<SceneWrapper>,
    mut hovering: Local<bool>,
    mut commands: Commands,
) {
    let Ok((window_entity, window)) = window_query.get_single() else {
        return;
    };
    let now_ms = (time.elapsed_secs_f64() * 1000.0) as u64;
    let cursor = window.cursor_position();

    // Release ends the drag wherever the cursor is; the session's own
    // slop gate decides whether the click that follows still counts.
    if mouse.just_released(MouseButton::Left) && drag.pressed {
        drag.pressed = false;
        scene.0.drag_end();
        if let (Some(cursor), Ok((camera, camera_transform))) = (cursor, camera_query.get_single())
        {
            if let Some(ray) = pick_ray(camera, camera_transform, cursor) {
                scene.0.click(ray, now_ms);
            }
        }
        return;
    }

    let Some(cursor) = cursor else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        drag.pressed = true;
        drag.origin = cursor;
        drag.last = cursor;
        drag.travel = 0.0;
        scene.0.drag_begin();
    }

    if drag.pressed {
        drag.travel += cursor.distance(drag.last);
        drag.last = cursor;
        let dx = (cursor.x - drag.origin.x) / window.width();
        let dy = (cursor.y - drag.origin.y) / window.height();
        scene.0.drag_move(dx, dy, drag.travel, now_ms);
    } else {
        let ndc_x = (cursor.x / window.width()) * 2.0 - 1.0;
        let ndc_y = 1.0 - (cursor.y / window.height()) * 2.0;
        scene.0.pointer_moved(ndc_x, ndc_y);
    }

    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Some(ray) = pick_ray(camera, camera_transform, cursor) else {
        return;
    };
    let over = scene.0.hover(ray);
    if over != *hovering {
        *hovering = over;
        let icon = if over { SystemCursorIcon::Pointer } else { SystemCursorIcon::Default };
        commands.entity(window_entity).insert(CursorIcon::System(icon));
    }
}

fn wheel_input(mut scroll_events: EventReader<MouseWheel>, mut scene: ResMut<SceneWrapper>) {
    for scroll in scroll_events.read() {
        let px = match scroll.unit {
            MouseScrollUnit::Line => scroll.y * SCROLL_LINE_PX,
            MouseScrollUnit::Pixel => scroll.y,
        };
        // Wheel-down approaches, matching the scene's glide sign.
        scene.0.wheel(-px);
    }
}

fn key_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<SceneWrapper>,
    mut panel: ResMut<PanelState>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        if panel.open.is_some() {
            panel.open = None;
            scene.0.set_panel_open(false);
        } else {
            scene.0.request_exit();
        }
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        scene.0.step_item(-1);
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        scene.0.step_item(1);
    }
}

fn route_events(
    mut scene: ResMut<SceneWrapper>,
    mut router: ResMut<Router>,
    mut panel: ResMut<PanelState>,
) {
    for event in scene.0.drain_events() {
        match event {
            SessionEvent::EnterRoom(room) => router.pending = Some(room),
            SessionEvent::ExitRoom => router.pending = router.current.parent(),
            SessionEvent::OpenPanel(key) => panel.open = Some(key),
        }
    }
}

/// Dispose the departing session, rebuild at the routed room, remirror.
/// The portrait only loads for rooms that hang the frame.
fn rebuild_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut image_assets: ResMut<Assets<Image>>,
    mut cache: ResMut<TextureCache>,
    mut scene: ResMut<SceneWrapper>,
    mut router: ResMut<Router>,
    mut panel: ResMut<PanelState>,
    quality: Res<Quality>,
    manor: Res<Manor>,
    host: Res<HostConfig>,
    mirrors: Query<Entity, Or<(With<PropMirror>, With<LightMirror>)>>,
    mut veil: Query<&mut BackgroundColor, With<FadeVeil>>,
) {
    let next = match router.pending.take() {
        Some(room) => room,
        None => return,
    };

    let _ = scene.0.dispose();
    for entity in &mirrors {
        commands.entity(entity).despawn();
    }
    cache.0.clear();
    panel.open = None;

    let mut session = SceneSession::build(next, &quality.settings, &manor.0);
    if session.rig().portrait.is_some() {
        let portrait = portrait_or_placeholder(
            host.0.portrait_path.as_deref(),
            Duration::from_millis(host.0.portrait_deadline_ms),
            &TextureFactory::new(quality.settings.texture_scale),
        );
        session.set_portrait_image(portrait);
    }
    spawn_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut image_assets,
        &mut cache,
        &session,
    );
    router.current = next;
    scene.0 = session;

    if let Ok(mut cover) = veil.get_single_mut() {
        cover.0.set_alpha(1.0);
    }
}

/// Copy session placements onto mirror transforms and fold the two
/// animated material facts (opacity, swapped texture) into the assets.
fn sync_props(
    scene: Res<SceneWrapper>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut image_assets: ResMut<Assets<Image>>,
    mut cache: ResMut<TextureCache>,
    mut query: Query<(&mut PropMirror, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (mut mirror, mut transform, material) in &mut query {
        let placement = match scene.0.world().get::<&Placement>(mirror.source) {
            Ok(placement) => *placement,
            Err(_) => continue,
        };
        *transform = placement_transform(&placement);

        let surface = match scene.0.world().get::<&Surface>(mirror.source) {
            Ok(surface) => *surface,
            Err(_) => continue,
        };
        if surface.opacity != mirror.opacity {
            if let Some(material) = materials.get_mut(&material.0) {
                material.base_color = material.base_color.with_alpha(surface.opacity);
                material.alpha_mode =
                    if surface.opacity < 1.0 { AlphaMode::Blend } else { AlphaMode::Opaque };
            }
            mirror.opacity = surface.opacity;
        }
        if surface.texture != mirror.texture {
            if let Some(material) = materials.get_mut(&material.0) {
                material.base_color_texture = surface
                    .texture
                    .and_then(|id| texture_handle(id, &scene.0, &mut image_assets, &mut cache));
            }
            mirror.texture = surface.texture;
        }
    }
}

fn sync_lights(
    scene: Res<SceneWrapper>,
    mut points: Query<(&LightMirror, &mut PointLight)>,
    mut spots: Query<(&LightMirror, &mut SpotLight)>,
    mut suns: Query<(&LightMirror, &mut DirectionalLight)>,
) {
    for (mirror, mut light) in &mut points {
        if let Ok(rig) = scene.0.world().get::<&LightRig>(mirror.0) {
            light.intensity = rig.intensity * POINT_LUMENS;
            light.color = color_of(rig.color);
        }
    }
    for (mirror, mut light) in &mut spots {
        if let Ok(rig) = scene.0.world().get::<&LightRig>(mirror.0) {
            light.intensity = rig.intensity * SPOT_LUMENS;
            light.color = color_of(rig.color);
        }
    }
    for (mirror, mut light) in &mut suns {
        if let Ok(rig) = scene.0.world().get::<&LightRig>(mirror.0) {
            light.illuminance = rig.intensity * SUN_LUX;
            light.color = color_of(rig.color);
        }
    }
}

/// Particle clouds draw immediate-mode; re-spawning mesh entities for
/// drifting motes every frame would fight the mirror bookkeeping.
fn draw_particles(scene: Res<SceneWrapper>, mut gizmos: Gizmos) {
    for (_, cloud) in scene.0.world().query::<&DriftParticles>().iter() {
        let color = color_of(cloud.color).with_alpha(cloud.opacity);
        for p in &cloud.positions {
            gizmos.sphere(Isometry3d::from_translation(vec3(*p)), cloud.size, color);
        }
    }
}

/// Camera pose, fov, fog, ambient and clear color, straight off the rig
/// every frame. The narrow fov kicks in under the viewport threshold.
fn apply_stage_look(
    scene: Res<SceneWrapper>,
    mut clear: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<
        (&mut Transform, &mut Projection, &mut DistanceFog),
        With<Camera3d>,
    >,
) {
    let rig = scene.0.rig();
    clear.0 = color_of(rig.background);
    ambient.color = color_of(rig.ambient.0);
    ambient.brightness = rig.ambient.1 * AMBIENT_LUX;

    let Ok((mut transform, mut projection, mut fog)) = camera_query.get_single_mut() else {
        return;
    };
    let camera = scene.0.camera();
    *transform =
        Transform::from_translation(vec3(camera.pos)).looking_at(vec3(camera.look), Vec3::Y);

    let width = window_query.get_single().map(|w| w.width()).unwrap_or(NARROW_VIEWPORT);
    let fov = if width < NARROW_VIEWPORT { rig.fov_narrow } else { rig.fov_wide };
    *projection =
        Projection::Perspective(PerspectiveProjection { fov: fov.to_radians(), ..default() });
    *fog = fog_for(rig);
}

fn update_panel(
    mut commands: Commands,
    mut panel: ResMut<PanelState>,
    manor: Res<Manor>,
    roots: Query<Entity, With<PanelRoot>>,
) {
    if panel.open == panel.shown {
        return;
    }
    for entity in &roots {
        commands.entity(entity).despawn_recursive();
    }
    panel.shown = panel.open;

    let key = match panel.open {
        Some(key) => key,
        None => return,
    };
    let copy = manor.0.panel(key);
    let accent = color_of(copy.accent_color());
    let footer = if key.room().is_some() {
        "Esc closes · a second click on the prop steps inside"
    } else {
        "Esc closes"
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(24.0),
                top: Val::Px(24.0),
                width: Val::Px(380.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.03, 0.02, 0.05, 0.92)),
            PanelRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(copy.title.clone()),
                TextFont { font_size: 22.0, ..default() },
                TextColor(accent),
            ));
            parent.spawn((
                Text::new(copy.subtitle.clone()),
                TextFont { font_size: 13.0, ..default() },
                TextColor(Color::srgba(0.82, 0.78, 0.7, 0.9)),
            ));
            parent.spawn((
                Text::new(copy.body.clone()),
                TextFont { font_size: 13.0, ..default() },
                TextColor(Color::srgba(0.75, 0.72, 0.66, 0.9)),
            ));
            for line in panel_lines(key, &manor.0) {
                parent.spawn((
                    Text::new(line),
                    TextFont { font_size: 12.0, ..default() },
                    TextColor(Color::srgba(0.62, 0.6, 0.56, 0.9)),
                ));
            }
            parent.spawn((
                Text::new(footer),
                TextFont { font_size: 11.0, ..default() },
                TextColor(Color::srgba(0.5, 0.48, 0.45, 0.8)),
            ));
        });
}

fn fade_veil(time: Res<Time>, mut query: Query<&mut BackgroundColor, With<FadeVeil>>) {
    let Ok(mut cover) = query.get_single_mut() else {
        return;
    };
    let alpha = cover.0.alpha();
    if alpha > 0.0 {
        cover.0.set_alpha((alpha - time.delta_secs() * FADE_RATE).max(0.0));
    }
}

fn update_hint(
    scene: Res<SceneWrapper>,
    panel: Res<PanelState>,
    mut query: Query<&mut Text, With<HintText>>,
) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    let rig = scene.0.rig();
    let hint = if panel.open.is_some() {
        "Esc closes the panel"
    } else if rig.wasd {
        "WASD walks · double-click the floor to travel · click doors and props · Esc goes back"
    } else if rig.parallax {
        "scroll to approach · click the front door"
    } else {
        "arrow keys browse · click a piece to focus · Esc goes back"
    };
    **text = hint.to_string();
}

// ── Mirroring ────────────────────────────────────────────────────────────

/// Spawn Bevy twins for every visible prop and every light in the
/// session world. Invisible surfaces stay hecs-only; they exist for
/// picking, not drawing.
fn spawn_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    image_assets: &mut Assets<Image>,
    cache: &mut TextureCache,
    session: &SceneSession,
) {
    for (entity, (placement, shape, surface)) in
        session.world().query::<(&Placement, &PropShape, &Surface)>().iter()
    {
        if !surface.visible {
            continue;
        }
        let plane = matches!(shape, PropShape::Plane { .. });
        let material = surface_material(surface, plane, session, image_assets, cache);
        commands.spawn((
            Mesh3d(meshes.add(shape_mesh(shape))),
            MeshMaterial3d(materials.add(material)),
            placement_transform(placement),
            PropMirror { source: entity, texture: surface.texture, opacity: surface.opacity },
        ));
    }

    for (entity, (placement, light, aim)) in
        session.world().query::<(&Placement, &LightRig, Option<&Aim>)>().iter()
    {
        let pos = vec3(placement.pos);
        let transform = match aim {
            Some(Aim(at)) => Transform::from_translation(pos).looking_at(vec3(*at), Vec3::Y),
            // Unaimed spots face straight down.
            None => Transform::from_translation(pos).looking_at(pos - Vec3::Y, Vec3::Z),
        };
        match light.kind {
            LightKind::Point => {
                commands.spawn((
                    PointLight {
                        color: color_of(light.color),
                        intensity: light.intensity * POINT_LUMENS,
                        range: light.range,
                        shadows_enabled: light.shadows,
                        ..default()
                    },
                    transform,
                    LightMirror(entity),
                ));
            }
            LightKind::Spot { angle, penumbra } => {
                commands.spawn((
                    SpotLight {
                        color: color_of(light.color),
                        intensity: light.intensity * SPOT_LUMENS,
                        range: light.range,
                        shadows_enabled: light.shadows,
                        outer_angle: angle,
                        inner_angle: angle * (1.0 - penumbra),
                        ..default()
                    },
                    transform,
                    LightMirror(entity),
                ));
            }
            LightKind::Directional => {
                commands.spawn((
                    DirectionalLight {
                        color: color_of(light.color),
                        illuminance: light.intensity * SUN_LUX,
                        shadows_enabled: light.shadows,
                        ..default()
                    },
                    transform,
                    LightMirror(entity),
                ));
            }
        }
    }
}

fn shape_mesh(shape: &PropShape) -> Mesh {
    match *shape {
        PropShape::Box { w, h, d } => Cuboid::new(w, h, d).into(),
        PropShape::Plane { w, h } => Plane3d::new(Vec3::Z, Vec2::new(w * 0.5, h * 0.5)).into(),
        PropShape::Cylinder { radius_top, radius_bottom, height } => {
            if (radius_top - radius_bottom).abs() < f32::EPSILON {
                Cylinder::new(radius_top, height).into()
            } else {
                ConicalFrustum { radius_top, radius_bottom, height }.into()
            }
        }
        PropShape::Sphere { radius } => Sphere::new(radius).into(),
        PropShape::Cone { radius, height } => Cone { radius, height }.into(),
        PropShape::Torus { radius, tube } => {
            Torus { minor_radius: tube, major_radius: radius }.into()
        }
    }
}

fn surface_material(
    surface: &Surface,
    plane: bool,
    session: &SceneSession,
    image_assets: &mut Assets<Image>,
    cache: &mut TextureCache,
) -> StandardMaterial {
    let mut material = StandardMaterial {
        base_color: color_of(surface.color).with_alpha(surface.opacity),
        perceptual_roughness: surface.roughness.clamp(0.089, 1.0),
        metallic: surface.metalness,
        unlit: surface.unlit,
        ..default()
    };
    if plane {
        material.double_sided = true;
        material.cull_mode = None;
    }
    if surface.opacity < 1.0 {
        material.alpha_mode = AlphaMode::Blend;
    }
    if let Some(color) = surface.emissive {
        material.emissive = color_of(color).to_linear() * surface.emissive_strength;
    }
    if let Some(id) = surface.texture {
        material.base_color_texture = texture_handle(id, session, image_assets, cache);
    }
    if let Some(id) = surface.bump {
        material.depth_map = texture_handle(id, session, image_assets, cache);
        material.parallax_depth_scale = BUMP_DEPTH;
    }
    if surface.repeat != (1.0, 1.0) {
        material.uv_transform = Affine2::from_scale(Vec2::new(surface.repeat.0, surface.repeat.1));
    }
    material
}

fn texture_handle(
    id: ResourceId,
    session: &SceneSession,
    image_assets: &mut Assets<Image>,
    cache: &mut TextureCache,
) -> Option<Handle<Image>> {
    if let Some(handle) = cache.0.get(&id) {
        return Some(handle.clone());
    }
    let raster = session.images().get(&id)?;
    let mut image = Image::new(
        Extent3d { width: raster.width(), height: raster.height(), depth_or_array_layers: 1 },
        TextureDimension::D2,
        raster.clone().into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..default()
    });
    let handle = image_assets.add(image);
    cache.0.insert(id, handle.clone());
    Some(handle)
}

// ── Small conversions ────────────────────────────────────────────────────

fn vec3(v: SceneVec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn color_of(c: Rgb8) -> Color {
    Color::srgb_u8(c.r, c.g, c.b)
}

fn placement_transform(placement: &Placement) -> Transform {
    Transform::from_translation(vec3(placement.pos)).with_rotation(Quat::from_euler(
        EulerRot::XYZ,
        placement.rot.x,
        placement.rot.y,
        placement.rot.z,
    ))
}

/// Zero density stands in for "no fog" so the camera component never
/// needs inserting or removing mid-run.
fn fog_for(rig: &RoomRig) -> DistanceFog {
    match rig.fog {
        Some(fog) => DistanceFog {
            color: color_of(fog.color),
            falloff: FogFalloff::Exponential { density: fog.density },
            ..default()
        },
        None => DistanceFog {
            color: Color::NONE,
            falloff: FogFalloff::Exponential { density: 0.0 },
            ..default()
        },
    }
}

fn pick_ray(camera: &Camera, camera_transform: &GlobalTransform, cursor: Vec2) -> Option<Ray> {
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    Some(Ray::new(
        SceneVec3::new(ray.origin.x, ray.origin.y, ray.origin.z),
        SceneVec3::new(ray.direction.x, ray.direction.y, ray.direction.z),
    ))
}

fn panel_lines(key: PanelKey, content: &ManorContent) -> Vec<String> {
    match key {
        PanelKey::Resident => Vec::new(),
        PanelKey::Archive => content
            .archive
            .iter()
            .flat_map(|e| [format!("{} · {}", e.years, e.heading), e.body.clone()])
            .collect(),
        PanelKey::Vault => content
            .vault
            .iter()
            .flat_map(|e| [format!("{} · {}", e.years, e.heading), e.body.clone()])
            .collect(),
        PanelKey::Library => content.library.chunks(3).map(|row| row.join(" · ")).collect(),
        PanelKey::Gallery => content
            .gallery
            .iter()
            .map(|w| format!("{} · {}", w.name, w.caption))
            .collect(),
    }
}
