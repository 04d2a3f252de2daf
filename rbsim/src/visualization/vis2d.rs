use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, Shape};

#[derive(Component)]
struct BodyIndex(pub usize);

const WINDOW_TITLE: &str = "2D Physics Simulator";
const POINT_SIZE: f32 = 2.0; // on-screen size of a point body

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.world.len());

    let width = scenario.parameters.bounds.width as f32;
    let height = scenario.parameters.bounds.height as f32;

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: WindowResolution::new(width, height),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (click_spawn_system, physics_step_system, spawn_meshes_system, sync_transforms_system).chain(),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Left click spawns the scenario's template body under the cursor
fn click_spawn_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    // window coordinates already match the simulation: top-left origin, y down
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let position = NVec2::new(cursor.x as f64, cursor.y as f64);
    if let Err(e) = scenario.spawn_from_template(position) {
        warn!("Invalid input: {}", e);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

/// Create a mesh entity for every body appended since the last frame
fn spawn_meshes_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut spawned: Local<usize>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let bodies = &scenario.world.bodies;
    if bodies.len() <= *spawned {
        return;
    }

    for (i, body) in bodies.iter().enumerate().skip(*spawned) {
        let mesh = match *body.shape() {
            Shape::Circle { radius } => meshes.add(Circle::new(radius as f32)),
            Shape::Rectangle { width, height } => meshes.add(Rectangle::new(width as f32, height as f32)),
            Shape::Square { side } => meshes.add(Rectangle::new(side as f32, side as f32)),
            Shape::Point => meshes.add(Rectangle::new(POINT_SIZE, POINT_SIZE)),
        };
        let [r, g, b] = body.appearance.rgb();

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(mesh),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: Transform::from_translation(to_view(body, &scenario)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    *spawned = bodies.len();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.world.bodies.get(*i) {
            transform.translation = to_view(b, &scenario);
        }
    }
}

/// Screen coordinates (top-left origin, y down) to the camera's centred,
/// y-up space. Boxes are positioned by corner but meshed around their center.
fn to_view(body: &Body, scenario: &Scenario) -> Vec3 {
    let center = match body.shape().box_size() {
        Some(size) => body.position + size * 0.5,
        None => body.position,
    };
    let bounds = &scenario.parameters.bounds;

    Vec3::new(
        (center.x - 0.5 * bounds.width) as f32,
        (0.5 * bounds.height - center.y) as f32,
        0.0,
    )
}
