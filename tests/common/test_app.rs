use bevy::prelude::*;
use flyer_lite::{
    components::{ControlInput, FlightConfig, PlayerController},
    plugins::{
        start_flight, FlightDynamicsPlugin, FlightModeChanged, GearToggleRequest, GearToggled,
    },
    resources::PhysicsConfig,
    systems::FlightDynamics,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    flight_config: Option<FlightConfig>,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            flight_config: None,
            time_step: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flight_config(mut self, config: FlightConfig) -> Self {
        self.flight_config = Some(config);
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins).add_plugins(
            FlightDynamicsPlugin::new(self.flight_config.unwrap_or_default())
                .with_physics(PhysicsConfig::manual(self.time_step)),
        );

        // Same startup as the headless driver: spawn, then rewind the idle step
        let aircraft = start_flight(&mut app).expect("Aircraft not spawned");

        TestApp { app, aircraft }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub aircraft: Entity,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Holds `controls` for the following frames.
    pub fn set_controls(&mut self, controls: ControlInput) {
        if let Some(mut current) = self.query_single_mut::<ControlInput>() {
            *current = controls;
        }
    }

    pub fn request_gear_toggle(&mut self) {
        self.app.world_mut().send_event(GearToggleRequest);
    }

    pub fn set_controller_active(&mut self, active: bool) {
        if let Some(mut controller) = self.query_single_mut::<PlayerController>() {
            controller.active = active;
        }
    }

    pub fn dynamics(&mut self) -> &FlightDynamics {
        self.query_single::<FlightDynamics>()
            .expect("Aircraft not spawned")
    }

    /// Outbound gear events still held in the event buffers.
    pub fn gear_events(&self) -> Vec<GearToggled> {
        self.drain_events::<GearToggled>()
    }

    pub fn mode_events(&self) -> Vec<FlightModeChanged> {
        self.drain_events::<FlightModeChanged>()
    }

    fn drain_events<E: Event + Copy>(&self) -> Vec<E> {
        let events = self.app.world().resource::<Events<E>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).copied().collect()
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
