/*!
# Map Manager

Owns the registry of map configurations and the scene objects spawned for
the active one.

Every `load` starts by destroying the previous generation of objects, so at
most one map's worth of entities is ever alive per manager.
*/

use bevy::prelude::*;
use std::sync::Arc;

use crate::ecs::core::{
    MapConfiguration, MapError, MapSettings, MapVisuals, PlaceholderShape, SpawnRole, VisualKey,
};
use crate::ecs::plugins::map::components::SpawnSet;
use crate::ecs::plugins::map::host::SceneHost;

/// Outcome of a visual lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedVisual<'a> {
    Asset(&'a VisualKey),
    Placeholder(PlaceholderShape),
    Missing,
}

/// Map override, then manager default, then `fallback` (if the object must
/// always exist).
pub fn resolve_visual<'a>(
    override_visual: Option<&'a VisualKey>,
    default_visual: Option<&'a VisualKey>,
    fallback: Option<PlaceholderShape>,
) -> ResolvedVisual<'a> {
    match override_visual.or(default_visual) {
        Some(key) => ResolvedVisual::Asset(key),
        None => fallback.map_or(ResolvedVisual::Missing, ResolvedVisual::Placeholder),
    }
}

/// Places a path object centred between `start` and `end`, its local +Z
/// axis facing `end` and stretched to span the distance.
pub fn path_transform(start: Vec3, end: Vec3) -> Transform {
    let offset = end - start;
    let direction = offset.normalize_or_zero();
    let rotation = if direction == Vec3::ZERO {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(Vec3::Z, direction)
    };

    Transform {
        translation: start + offset / 2.0,
        rotation,
        scale: Vec3::new(1.0, 1.0, offset.length()),
    }
}

/// Summary of a completed load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub index: Option<usize>,
    pub name: String,
    pub barriers: usize,
    pub placement_spots: usize,
    pub path_visual: bool,
    /// Non-fatal problems hit along the way.
    pub warnings: Vec<MapError>,
}

#[derive(Resource, Debug, Default)]
pub struct MapManager {
    registry: Vec<Arc<MapConfiguration>>,
    selected_index: usize,
    active_index: Option<usize>,
    active: Option<Arc<MapConfiguration>>,
    visuals: MapVisuals,
    spawned: SpawnSet,
}

impl MapManager {
    pub fn new(registry: Vec<MapConfiguration>, visuals: MapVisuals) -> Self {
        Self {
            registry: registry.into_iter().map(Arc::new).collect(),
            visuals,
            ..Default::default()
        }
    }

    pub fn from_settings(settings: &MapSettings) -> Self {
        let mut manager = Self::new(settings.maps.clone(), settings.visuals.clone());
        manager.selected_index = settings.selected_index;
        manager
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Loads the selected map, or the first one if the selection is stale.
    pub fn initialize(&mut self, host: &mut impl SceneHost) -> Result<LoadReport, MapError> {
        if self.registry.is_empty() {
            error!("No maps available in MapManager! Add map configurations to the settings.");
            return Err(MapError::EmptyRegistry);
        }

        let mut fallback = None;
        if self.selected_index >= self.registry.len() {
            let err = MapError::IndexOutOfRange {
                index: self.selected_index,
                len: self.registry.len(),
            };
            warn!("Selected map index {} is out of bounds. Loading first map instead.", self.selected_index);
            self.selected_index = 0;
            fallback = Some(err);
        }

        let mut report = self.select_by_index(host, self.selected_index)?;
        report.warnings.extend(fallback);
        Ok(report)
    }

    pub fn select_by_index(
        &mut self,
        host: &mut impl SceneHost,
        index: usize,
    ) -> Result<LoadReport, MapError> {
        let Some(config) = self.registry.get(index).cloned() else {
            warn!(
                "Attempted to select map with invalid index: {}. Available maps: {}",
                index,
                self.registry.len()
            );
            return Err(MapError::IndexOutOfRange {
                index,
                len: self.registry.len(),
            });
        };

        self.selected_index = index;
        self.load_at(host, Some(config), Some(index))
    }

    /// First map whose name matches exactly.
    pub fn select_by_name(
        &mut self,
        host: &mut impl SceneHost,
        name: &str,
    ) -> Result<LoadReport, MapError> {
        match self.registry.iter().position(|config| config.name == name) {
            Some(index) => self.select_by_index(host, index),
            None => {
                warn!("Attempted to select map with unknown name: {name}");
                Err(MapError::NameNotFound(name.to_string()))
            }
        }
    }

    // ========================================================================
    // LOADING
    // ========================================================================

    /// Replaces the spawned objects with those of `config`.
    ///
    /// A configuration that is also in the registry becomes the active index.
    pub fn load(
        &mut self,
        host: &mut impl SceneHost,
        config: Option<Arc<MapConfiguration>>,
    ) -> Result<LoadReport, MapError> {
        let index = config
            .as_ref()
            .and_then(|c| self.registry.iter().position(|r| Arc::ptr_eq(r, c)));
        self.load_at(host, config, index)
    }

    fn load_at(
        &mut self,
        host: &mut impl SceneHost,
        config: Option<Arc<MapConfiguration>>,
        index: Option<usize>,
    ) -> Result<LoadReport, MapError> {
        self.clear(host);

        let Some(config) = config else {
            error!("Attempted to load null map configuration.");
            return Err(MapError::NullConfiguration);
        };

        let mut report = LoadReport {
            index,
            name: config.name.clone(),
            ..Default::default()
        };

        self.spawn_marker(host, SpawnRole::StartMarker, config.start_point, &mut report);
        self.spawn_marker(host, SpawnRole::EndMarker, config.end_point, &mut report);

        report.barriers = self.spawn_at_positions(
            host,
            SpawnRole::Barrier,
            config.barrier_visual.as_ref(),
            &config.barrier_positions,
            &mut report,
        );
        report.placement_spots = self.spawn_at_positions(
            host,
            SpawnRole::PlacementSpot,
            config.placement_spot_visual.as_ref(),
            &config.placement_spots,
            &mut report,
        );

        if let ResolvedVisual::Asset(visual) =
            resolve_visual(config.path_visual.as_ref(), None, None)
        {
            let role = SpawnRole::PathVisual;
            let transform = path_transform(config.start_point, config.end_point);
            let entity = host.instantiate(visual, transform, role, role.object_name());
            self.spawned.insert(role, entity);
            report.path_visual = true;
        }

        self.active = Some(config);
        self.active_index = index;
        info!("Map '{}' loaded successfully.", report.name);
        Ok(report)
    }

    fn spawn_marker(
        &mut self,
        host: &mut impl SceneHost,
        role: SpawnRole,
        position: Vec3,
        report: &mut LoadReport,
    ) {
        let (default_visual, shape) = match role {
            SpawnRole::StartMarker => (self.visuals.start_marker.as_ref(), PlaceholderShape::Sphere),
            _ => (self.visuals.end_marker.as_ref(), PlaceholderShape::Cube),
        };
        let transform = Transform::from_translation(position);

        let entity = match resolve_visual(None, default_visual, Some(shape)) {
            ResolvedVisual::Asset(visual) => {
                host.instantiate(visual, transform, role, role.object_name())
            }
            ResolvedVisual::Placeholder(shape) => {
                warn!("{} visual not assigned. Creating a default {shape}.", role.object_name());
                report.warnings.push(MapError::PlaceholderSubstituted { kind: role, shape });
                let name = format!("{} (Default)", role.object_name());
                host.spawn_placeholder(shape, transform, role, &name)
            }
            ResolvedVisual::Missing => return,
        };
        self.spawned.insert(role, entity);
    }

    /// Spawns one object per position, or none if no visual resolves.
    fn spawn_at_positions(
        &mut self,
        host: &mut impl SceneHost,
        role: SpawnRole,
        override_visual: Option<&VisualKey>,
        positions: &[Vec3],
        report: &mut LoadReport,
    ) -> usize {
        let default_visual = match role {
            SpawnRole::Barrier => self.visuals.barrier.as_ref(),
            _ => self.visuals.placement_spot.as_ref(),
        };

        let ResolvedVisual::Asset(visual) = resolve_visual(override_visual, default_visual, None)
        else {
            if !positions.is_empty() {
                let err = MapError::MissingVisualAsset {
                    kind: role,
                    positions: positions.len(),
                };
                warn!("{err}");
                report.warnings.push(err);
            }
            return 0;
        };

        for &position in positions {
            let entity = host.instantiate(
                visual,
                Transform::from_translation(position),
                role,
                role.object_name(),
            );
            self.spawned.insert(role, entity);
        }
        positions.len()
    }

    /// Destroys every spawned object.
    fn clear(&mut self, host: &mut impl SceneHost) {
        for (role, entity) in self.spawned.drain() {
            if !host.destroy(entity) {
                debug!("{role} {entity:?} was already destroyed");
            }
        }
        self.active = None;
        self.active_index = None;
    }

    /// Destroys everything the manager spawned and forgets the active map.
    pub fn teardown(&mut self, host: &mut impl SceneHost) {
        if self.active.is_some() || !self.spawned.is_empty() {
            info!("Tearing down map objects ({} spawned)", self.spawned.len());
        }
        self.clear(host);
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn registry(&self) -> &[Arc<MapConfiguration>] {
        &self.registry
    }

    /// Swaps the registry. The active map stays loaded until the next selection.
    pub fn set_registry(&mut self, registry: Vec<MapConfiguration>) {
        self.registry = registry.into_iter().map(Arc::new).collect();
        self.active_index = None;
    }

    pub fn visuals(&self) -> &MapVisuals {
        &self.visuals
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_configuration(&self) -> Option<&Arc<MapConfiguration>> {
        self.active.as_ref()
    }

    pub fn spawned(&self) -> &SpawnSet {
        &self.spawned
    }

    pub fn active_start_point(&self) -> Vec3 {
        self.active.as_ref().map_or(Vec3::ZERO, |c| c.start_point)
    }

    pub fn active_end_point(&self) -> Vec3 {
        self.active.as_ref().map_or(Vec3::ZERO, |c| c.end_point)
    }

    /// Start, waypoints and end of the active map; empty if none is loaded.
    pub fn active_path(&self) -> Vec<Vec3> {
        self.active.as_ref().map(|c| c.path()).unwrap_or_default()
    }

    pub fn active_placement_limit(&self) -> u32 {
        self.active.as_ref().map_or(0, |c| c.placement_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::core::{MapObject, MapVisual};

    const EPSILON: f32 = 1e-5;

    fn visuals() -> MapVisuals {
        MapVisuals {
            start_marker: Some(VisualKey::new("start_flag")),
            end_marker: Some(VisualKey::new("goal_flag")),
            barrier: Some(VisualKey::new("barrier")),
            placement_spot: Some(VisualKey::new("placement_spot")),
        }
    }

    fn registry() -> Vec<MapConfiguration> {
        vec![
            MapConfiguration::new("Meadow", Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0))
                .with_barriers([Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -2.0)])
                .with_placement_spots([Vec3::new(-2.0, 0.0, 1.0)]),
            MapConfiguration::new("Canyon", Vec3::new(-8.0, 0.0, -4.0), Vec3::new(8.0, 0.0, 4.0))
                .with_barriers([Vec3::new(1.0, 0.0, 1.0)])
                .with_placement_spots([Vec3::ZERO, Vec3::X, Vec3::Z])
                .with_placement_limit(3)
                .with_path_visual("dirt_road"),
            MapConfiguration::new("Ridge", Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 9.0)),
        ]
    }

    fn map_objects(world: &mut World) -> usize {
        world.query::<&MapObject>().iter(world).count()
    }

    fn translation(world: &World, entity: Entity) -> Vec3 {
        world.get::<Transform>(entity).unwrap().translation
    }

    #[test]
    fn test_select_by_index_spawns_markers_at_endpoints() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());

        for i in 0..manager.registry().len() {
            manager.select_by_index(&mut world, i).unwrap();
            let expected = manager.registry()[i].clone();

            assert_eq!(manager.active_index(), Some(i));
            assert!(Arc::ptr_eq(manager.active_configuration().unwrap(), &expected));

            let spawned = manager.spawned();
            assert_eq!(spawned.count(SpawnRole::StartMarker), 1);
            assert_eq!(spawned.count(SpawnRole::EndMarker), 1);
            let start = spawned.entities(SpawnRole::StartMarker).next().unwrap();
            let end = spawned.entities(SpawnRole::EndMarker).next().unwrap();
            assert_eq!(translation(&world, start), expected.start_point);
            assert_eq!(translation(&world, end), expected.end_point);
            assert_eq!(manager.active_start_point(), expected.start_point);
            assert_eq!(manager.active_end_point(), expected.end_point);
        }
    }

    #[test]
    fn test_reload_does_not_accumulate_objects() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());
        let config = manager.registry()[1].clone();

        manager.load(&mut world, Some(config.clone())).unwrap();
        let once = manager.spawned().len();
        let live_once = map_objects(&mut world);

        manager.load(&mut world, Some(config)).unwrap();
        assert_eq!(manager.spawned().len(), once);
        assert_eq!(map_objects(&mut world), live_once);
        assert_eq!(live_once, once);
    }

    #[test]
    fn test_switching_maps_destroys_previous_objects() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());

        manager.select_by_index(&mut world, 1).unwrap();
        let old: Vec<Entity> = manager.spawned().iter().map(|(_, e)| e).collect();
        manager.select_by_index(&mut world, 2).unwrap();

        for entity in old {
            assert!(!world.entities().contains(entity));
        }
        // Ridge has only markers
        assert_eq!(manager.spawned().len(), 2);
        assert_eq!(map_objects(&mut world), 2);
    }

    #[test]
    fn test_out_of_range_index_keeps_current_map() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());
        manager.select_by_index(&mut world, 1).unwrap();
        let before = manager.spawned().len();

        for bad in [3, 17, usize::MAX] {
            let err = manager.select_by_index(&mut world, bad).unwrap_err();
            assert_eq!(err, MapError::IndexOutOfRange { index: bad, len: 3 });
            assert_eq!(manager.active_index(), Some(1));
            assert_eq!(manager.active_configuration().unwrap().name, "Canyon");
            assert_eq!(manager.spawned().len(), before);
        }
    }

    #[test]
    fn test_select_by_name() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());
        manager.select_by_index(&mut world, 0).unwrap();

        let err = manager.select_by_name(&mut world, "Swamp").unwrap_err();
        assert_eq!(err, MapError::NameNotFound("Swamp".to_string()));
        assert_eq!(manager.active_index(), Some(0));

        let by_name = manager.select_by_name(&mut world, "Canyon").unwrap();
        let by_name_count = manager.spawned().len();
        let by_index = manager.select_by_index(&mut world, 1).unwrap();
        assert_eq!(by_name, by_index);
        assert_eq!(manager.spawned().len(), by_name_count);
        assert_eq!(manager.active_index(), Some(1));
    }

    #[test]
    fn test_duplicate_names_pick_first() {
        let mut world = World::new();
        let mut maps = registry();
        maps.push(MapConfiguration::new("Meadow", Vec3::ONE, Vec3::NEG_ONE));
        let mut manager = MapManager::new(maps, visuals());

        manager.select_by_name(&mut world, "Meadow").unwrap();
        assert_eq!(manager.active_index(), Some(0));
    }

    #[test]
    fn test_instance_counts_follow_positions() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());

        let report = manager.select_by_index(&mut world, 1).unwrap();
        assert_eq!(report.barriers, 1);
        assert_eq!(report.placement_spots, 3);
        assert_eq!(manager.spawned().count(SpawnRole::Barrier), 1);
        assert_eq!(manager.spawned().count(SpawnRole::PlacementSpot), 3);

        let spots: Vec<Vec3> = manager
            .spawned()
            .entities(SpawnRole::PlacementSpot)
            .map(|e| translation(&world, e))
            .collect();
        assert_eq!(spots, vec![Vec3::ZERO, Vec3::X, Vec3::Z]);
    }

    #[test]
    fn test_map_override_beats_manager_default() {
        let mut world = World::new();
        let config = MapConfiguration::new("Quarry", Vec3::ZERO, Vec3::X)
            .with_barriers([Vec3::Z])
            .with_barrier_visual("rock_wall")
            .with_placement_spots([Vec3::Y]);
        let mut manager = MapManager::new(vec![config], visuals());
        manager.select_by_index(&mut world, 0).unwrap();

        let barrier = manager.spawned().entities(SpawnRole::Barrier).next().unwrap();
        let spot = manager.spawned().entities(SpawnRole::PlacementSpot).next().unwrap();
        assert_eq!(world.get::<MapVisual>(barrier).unwrap().0, VisualKey::new("rock_wall"));
        assert_eq!(world.get::<MapVisual>(spot).unwrap().0, VisualKey::new("placement_spot"));
    }

    #[test]
    fn test_unresolved_barrier_visual_is_skipped_with_warning() {
        let mut world = World::new();
        let config = MapConfiguration::new("Bare", Vec3::ZERO, Vec3::X)
            .with_barriers([Vec3::new(1.0, 0.0, 1.0)]);
        let mut manager = MapManager::new(
            vec![config],
            MapVisuals {
                barrier: None,
                ..visuals()
            },
        );

        let report = manager.select_by_index(&mut world, 0).unwrap();
        assert_eq!(report.barriers, 0);
        assert_eq!(manager.spawned().count(SpawnRole::Barrier), 0);
        assert_eq!(
            report.warnings,
            vec![MapError::MissingVisualAsset {
                kind: SpawnRole::Barrier,
                positions: 1
            }]
        );
    }

    #[test]
    fn test_unresolved_visual_without_positions_is_silent() {
        let mut world = World::new();
        let config = MapConfiguration::new("Empty", Vec3::ZERO, Vec3::X);
        let mut manager = MapManager::new(vec![config], visuals_with_markers_only());

        let report = manager.select_by_index(&mut world, 0).unwrap();
        assert!(report.warnings.is_empty());
        assert_eq!(manager.spawned().len(), 2);
    }

    fn visuals_with_markers_only() -> MapVisuals {
        MapVisuals {
            barrier: None,
            placement_spot: None,
            ..visuals()
        }
    }

    #[test]
    fn test_missing_marker_visuals_use_placeholders() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), MapVisuals::default());

        let report = manager.select_by_index(&mut world, 2).unwrap();
        let start = manager.spawned().entities(SpawnRole::StartMarker).next().unwrap();
        let end = manager.spawned().entities(SpawnRole::EndMarker).next().unwrap();

        assert_eq!(world.get::<PlaceholderShape>(start), Some(&PlaceholderShape::Sphere));
        assert_eq!(world.get::<PlaceholderShape>(end), Some(&PlaceholderShape::Cube));
        assert_eq!(world.get::<Name>(start).unwrap().as_str(), "Start Marker (Default)");
        assert_eq!(translation(&world, end), Vec3::new(0.0, 1.0, 9.0));
        assert_eq!(
            report.warnings,
            vec![
                MapError::PlaceholderSubstituted {
                    kind: SpawnRole::StartMarker,
                    shape: PlaceholderShape::Sphere
                },
                MapError::PlaceholderSubstituted {
                    kind: SpawnRole::EndMarker,
                    shape: PlaceholderShape::Cube
                },
            ]
        );
        assert!(report.warnings.iter().all(MapError::is_warning));
    }

    #[test]
    fn test_path_visual_spans_start_to_end() {
        let mut world = World::new();
        let config = MapConfiguration::new("Line", Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0))
            .with_path_visual("dirt_road");
        let mut manager = MapManager::new(vec![config], visuals());

        let report = manager.select_by_index(&mut world, 0).unwrap();
        assert!(report.path_visual);

        let path = manager.spawned().entities(SpawnRole::PathVisual).next().unwrap();
        let transform = world.get::<Transform>(path).unwrap();
        assert!(transform.translation.abs_diff_eq(Vec3::ZERO, EPSILON));
        assert!((transform.rotation * Vec3::Z).abs_diff_eq(Vec3::X, EPSILON));
        assert!((transform.scale.z - 10.0).abs() < EPSILON);
        assert_eq!(transform.scale.x, 1.0);
        assert_eq!(transform.scale.y, 1.0);
    }

    #[test]
    fn test_no_path_visual_without_override() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());

        let report = manager.select_by_index(&mut world, 0).unwrap();
        assert!(!report.path_visual);
        assert_eq!(manager.spawned().count(SpawnRole::PathVisual), 0);
    }

    #[test]
    fn test_path_transform_handles_reverse_and_degenerate() {
        let reverse = path_transform(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -3.0));
        assert!((reverse.rotation * Vec3::Z).abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert!((reverse.scale.z - 6.0).abs() < EPSILON);

        let point = path_transform(Vec3::ONE, Vec3::ONE);
        assert_eq!(point.rotation, Quat::IDENTITY);
        assert_eq!(point.translation, Vec3::ONE);
        assert_eq!(point.scale.z, 0.0);
    }

    #[test]
    fn test_empty_registry_then_explicit_load() {
        let mut world = World::new();
        let mut manager = MapManager::new(Vec::new(), visuals());

        assert_eq!(manager.initialize(&mut world).unwrap_err(), MapError::EmptyRegistry);
        assert!(manager.active_configuration().is_none());
        assert_eq!(manager.active_start_point(), Vec3::ZERO);
        assert_eq!(manager.active_end_point(), Vec3::ZERO);
        assert!(manager.active_path().is_empty());

        let config = Arc::new(MapConfiguration::new("Adhoc", Vec3::X, Vec3::Y));
        let report = manager.load(&mut world, Some(config)).unwrap();
        assert_eq!(report.index, None);
        assert_eq!(manager.active_configuration().unwrap().name, "Adhoc");
        assert_eq!(manager.active_start_point(), Vec3::X);
    }

    #[test]
    fn test_supplying_registry_recovers_from_empty() {
        let mut world = World::new();
        let mut manager = MapManager::new(Vec::new(), visuals());
        assert!(manager.initialize(&mut world).is_err());

        manager.set_registry(registry());
        let report = manager.initialize(&mut world).unwrap();
        assert_eq!(report.name, "Meadow");
        assert_eq!(manager.active_index(), Some(0));
    }

    #[test]
    fn test_initialize_falls_back_to_first_map() {
        let mut world = World::new();
        let mut settings = MapSettings::default();
        settings.maps = registry();
        settings.selected_index = 9;
        let mut manager = MapManager::from_settings(&settings);

        let report = manager.initialize(&mut world).unwrap();
        assert_eq!(report.index, Some(0));
        assert!(report.warnings.contains(&MapError::IndexOutOfRange { index: 9, len: 3 }));
        assert_eq!(manager.active_configuration().unwrap().name, "Meadow");
    }

    #[test]
    fn test_initialize_uses_selected_index() {
        let mut world = World::new();
        let mut settings = MapSettings::default();
        settings.maps = registry();
        settings.selected_index = 1;
        let mut manager = MapManager::from_settings(&settings);

        manager.initialize(&mut world).unwrap();
        assert_eq!(manager.active_index(), Some(1));
        assert_eq!(manager.active_placement_limit(), 3);
    }

    #[test]
    fn test_null_configuration_leaves_nothing_loaded() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());
        manager.select_by_index(&mut world, 0).unwrap();

        assert_eq!(manager.load(&mut world, None).unwrap_err(), MapError::NullConfiguration);
        assert!(manager.spawned().is_empty());
        assert!(manager.active_configuration().is_none());
        assert_eq!(manager.active_index(), None);
        assert_eq!(map_objects(&mut world), 0);
    }

    #[test]
    fn test_externally_destroyed_objects_are_tolerated() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());
        manager.select_by_index(&mut world, 0).unwrap();

        let barrier = manager.spawned().entities(SpawnRole::Barrier).next().unwrap();
        world.despawn(barrier);

        manager.select_by_index(&mut world, 0).unwrap();
        assert_eq!(manager.spawned().count(SpawnRole::Barrier), 2);
        assert_eq!(map_objects(&mut world), manager.spawned().len());
    }

    #[test]
    fn test_teardown_destroys_everything() {
        let mut world = World::new();
        let mut manager = MapManager::new(registry(), visuals());
        manager.select_by_index(&mut world, 1).unwrap();

        manager.teardown(&mut world);
        assert!(manager.spawned().is_empty());
        assert!(manager.active_configuration().is_none());
        assert_eq!(map_objects(&mut world), 0);
    }

    #[test]
    fn test_active_path_includes_waypoints() {
        let mut world = World::new();
        let config = MapConfiguration::new("Bend", Vec3::ZERO, Vec3::new(4.0, 0.0, 4.0))
            .with_path([Vec3::new(4.0, 0.0, 0.0)]);
        let mut manager = MapManager::new(vec![config], visuals());
        manager.select_by_index(&mut world, 0).unwrap();

        assert_eq!(manager.active_path().len(), 3);
    }

    #[test]
    fn test_resolve_visual_chain() {
        let map = VisualKey::new("map");
        let default = VisualKey::new("default");

        assert_eq!(
            resolve_visual(Some(&map), Some(&default), None),
            ResolvedVisual::Asset(&map)
        );
        assert_eq!(resolve_visual(None, Some(&default), None), ResolvedVisual::Asset(&default));
        assert_eq!(resolve_visual(None, None, None), ResolvedVisual::Missing);
        assert_eq!(
            resolve_visual(None, None, Some(PlaceholderShape::Sphere)),
            ResolvedVisual::Placeholder(PlaceholderShape::Sphere)
        );
    }
}
