//! Pointer hover picking for the glass cells and the reveal cube.
//!
//! Uses manual ray-AABB intersection instead of Bevy's mesh picking so the
//! egui panel and the backdrop never fight over the same pointer events.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::scene::cells::GlassCell;
use crate::scene::materials::random_color;
use crate::scene::reveal::RevealCube;
use crate::scene::visuals::CellVisuals;
use crate::scene::{BackdropCamera, PointerCapture};

/// Half extents of the pickable box, in the entity's local frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct HitBox(pub Vec3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    Cell(u32),
    RevealCube,
}

/// What the pointer is over, if anything.
#[derive(Resource, Default, Debug)]
pub struct HoverState {
    current: Option<HoverTarget>,
}

impl HoverState {
    pub fn current(&self) -> Option<HoverTarget> {
        self.current
    }

    pub fn is_over_reveal_cube(&self) -> bool {
        self.current == Some(HoverTarget::RevealCube)
    }

    /// Moves to `next`, returning the `(exited, entered)` pair when it differs.
    pub fn update(
        &mut self,
        next: Option<HoverTarget>,
    ) -> Option<(Option<HoverTarget>, Option<HoverTarget>)> {
        if self.current == next {
            return None;
        }
        let exited = std::mem::replace(&mut self.current, next);
        Some((exited, next))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

pub fn hover_pick_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<BackdropCamera>>,
    capture: Res<PointerCapture>,
    cells: Query<(&GlassCell, &GlobalTransform, &HitBox)>,
    reveal: Query<(&GlobalTransform, &HitBox), With<RevealCube>>,
    mut hover: ResMut<HoverState>,
    mut visuals: ResMut<CellVisuals>,
) {
    let next = if capture.over_ui {
        None
    } else {
        pick(&windows, &cameras, &cells, &reveal)
    };

    // Only touch the resource on a transition so change detection stays meaningful.
    if hover.current() == next {
        return;
    }
    let Some((exited, entered)) = hover.update(next) else {
        return;
    };
    if let Some(HoverTarget::Cell(id)) = exited {
        visuals.exit(id);
    }
    if let Some(HoverTarget::Cell(id)) = entered {
        visuals.enter(id, random_color(&mut rand::thread_rng()));
    }
}

fn pick(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<BackdropCamera>>,
    cells: &Query<(&GlassCell, &GlobalTransform, &HitBox)>,
    reveal: &Query<(&GlobalTransform, &HitBox), With<RevealCube>>,
) -> Option<HoverTarget> {
    let cursor = windows.get_single().ok()?.cursor_position()?;
    let (camera, cam_transform) = cameras.get_single().ok()?;
    let ray = camera.viewport_to_world(cam_transform, cursor).ok()?;
    nearest_target(ray.origin, *ray.direction, reveal, cells)
}

/// Closest hit along the ray; a cell only wins over the reveal cube when nearer.
pub(crate) fn nearest_target<'a>(
    origin: Vec3,
    dir: Vec3,
    reveal: impl IntoIterator<Item = (&'a GlobalTransform, &'a HitBox)>,
    cells: impl IntoIterator<Item = (&'a GlassCell, &'a GlobalTransform, &'a HitBox)>,
) -> Option<HoverTarget> {
    let reveal_hits = reveal
        .into_iter()
        .filter_map(|(transform, hit_box)| ray_box_test(origin, dir, transform, hit_box))
        .map(|dist| (HoverTarget::RevealCube, dist));
    let cell_hits = cells.into_iter().filter_map(|(glass, transform, hit_box)| {
        ray_box_test(origin, dir, transform, hit_box)
            .map(|dist| (HoverTarget::Cell(glass.cell.id), dist))
    });

    reveal_hits
        .chain(cell_hits)
        .fold(None, |best: Option<(HoverTarget, f32)>, hit| match best {
            Some((_, d)) if d <= hit.1 => best,
            _ => Some(hit),
        })
        .map(|(target, _)| target)
}

/// Tests the ray in the box's local frame, so a spinning cube is hit by its
/// faces rather than by an axis-aligned shell around it. Affine maps keep the
/// ray parameter, so distances from different boxes stay comparable.
fn ray_box_test(
    origin: Vec3,
    dir: Vec3,
    transform: &GlobalTransform,
    hit_box: &HitBox,
) -> Option<f32> {
    let to_local = transform.affine().inverse();
    slab_entry(
        to_local.transform_point3(origin),
        to_local.transform_vector3(dir),
        -hit_box.0,
        hit_box.0,
    )
}

/// Slab test against `[min, max]`: distance along `dir` where the ray enters
/// the box, `0` when it starts inside, `None` on a miss or a box behind it.
pub(crate) fn slab_entry(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let near = (min - origin) / dir;
    let far = (max - origin) / dir;
    let enter = near.min(far).max_element();
    let exit = near.max(far).min_element();
    (exit > 0.0 && enter <= exit).then(|| enter.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_box_in_front() {
        let hit = slab_entry(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::NEG_Z,
            Vec3::new(-0.5, -0.5, -3.5),
            Vec3::new(0.5, 0.5, -2.5),
        );
        assert_eq!(hit, Some(12.5));
    }

    #[test]
    fn ray_misses_box_to_the_side_and_behind() {
        let beside = slab_entry(
            Vec3::new(2.0, 0.0, 10.0),
            Vec3::NEG_Z,
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        );
        assert_eq!(beside, None);

        let behind = slab_entry(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::Z,
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        );
        assert_eq!(behind, None);
    }

    fn cell_at(id: u32, transform: Transform) -> (GlassCell, GlobalTransform, HitBox) {
        let cell = crate::grid::GridCell {
            x_index: id,
            y_index: 0,
            id,
        };
        (
            GlassCell::new(cell),
            GlobalTransform::from(transform),
            HitBox(Vec3::splat(0.5)),
        )
    }

    fn cast(
        x: f32,
        y: f32,
        reveal: &[(GlobalTransform, HitBox)],
        cells: &[(GlassCell, GlobalTransform, HitBox)],
    ) -> Option<HoverTarget> {
        nearest_target(
            Vec3::new(x, y, 10.0),
            Vec3::NEG_Z,
            reveal.iter().map(|(t, h)| (t, h)),
            cells.iter().map(|(c, t, h)| (c, t, h)),
        )
    }

    #[test]
    fn spinning_cell_is_picked_by_its_faces() {
        let turned = Transform::from_xyz(0.0, 0.0, -3.0)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4));
        let cells = [cell_at(7, turned)];

        // The rotated corner pokes past the unrotated half extent.
        assert_eq!(cast(0.6, 0.0, &[], &cells), Some(HoverTarget::Cell(7)));
        // Inside the unrotated square, but outside the turned one.
        assert_eq!(cast(0.45, 0.45, &[], &cells), None);
    }

    #[test]
    fn nearest_hit_wins_along_the_ray() {
        let cells = [
            cell_at(1, Transform::from_xyz(0.0, 0.0, -3.0)),
            cell_at(2, Transform::from_xyz(0.0, 0.0, 0.0)),
        ];
        assert_eq!(cast(0.0, 0.0, &[], &cells), Some(HoverTarget::Cell(2)));

        let near_cube = [(
            GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 2.0)),
            HitBox(Vec3::splat(0.45)),
        )];
        assert_eq!(cast(0.0, 0.0, &near_cube, &cells), Some(HoverTarget::RevealCube));

        let far_cube = [(
            GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -6.0)),
            HitBox(Vec3::splat(0.45)),
        )];
        assert_eq!(cast(0.0, 0.0, &far_cube, &cells), Some(HoverTarget::Cell(2)));
        assert_eq!(cast(5.0, 0.0, &far_cube, &cells), None);
    }

    #[test]
    fn scaled_box_grows_its_hit_area() {
        let grown = Transform::from_scale(Vec3::splat(1.25));
        let cube = [(GlobalTransform::from(grown), HitBox(Vec3::splat(0.45)))];
        assert_eq!(cast(0.5, 0.0, &cube, &[]), Some(HoverTarget::RevealCube));
        assert_eq!(cast(0.6, 0.0, &cube, &[]), None);
    }

    #[test]
    fn hover_transitions_report_exit_and_enter() {
        let mut hover = HoverState::default();

        assert_eq!(
            hover.update(Some(HoverTarget::Cell(4))),
            Some((None, Some(HoverTarget::Cell(4))))
        );
        assert_eq!(hover.update(Some(HoverTarget::Cell(4))), None);
        assert_eq!(
            hover.update(Some(HoverTarget::RevealCube)),
            Some((Some(HoverTarget::Cell(4)), Some(HoverTarget::RevealCube)))
        );
        assert!(hover.is_over_reveal_cube());

        hover.clear();
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn pick_without_window_leaves_cells_at_rest() {
        let mut app = App::new();
        app.init_resource::<PointerCapture>()
            .init_resource::<HoverState>()
            .init_resource::<CellVisuals>()
            .add_systems(Update, hover_pick_system);

        app.update();

        assert_eq!(app.world().resource::<HoverState>().current(), None);
        assert_eq!(app.world().resource::<CellVisuals>().hovered_count(), 0);
    }
}
