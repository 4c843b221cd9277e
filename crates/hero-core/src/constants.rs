// Shared tuning constants for scene construction and per-tick animation.
// Motion increments are per-tick, not delta-time scaled; scaling them
// would alter perceived speed on every device.

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 5000.0;
pub const CAMERA_Z: f32 = 1000.0;

// Network point cloud placement: radius band on a jittered sphere shell
pub const NODE_RADIUS_BASE: f32 = 200.0;
pub const NODE_RADIUS_SPAN: f32 = 150.0;
pub const NODE_VELOCITY_RANGE: f32 = 0.5; // per-component, centered on zero
pub const NODE_SPEED_DAMPING: f32 = 0.5;

// Radial band that triggers the velocity sign-flip bounce
pub const BOUNCE_MIN_RADIUS: f32 = 150.0;
pub const BOUNCE_MAX_RADIUS: f32 = 400.0;

pub const NETWORK_SPIN_PER_TICK: f32 = 0.0005;

// Themed HSL palette bands
pub const NODE_HUE_BASE: f32 = 0.55;
pub const NODE_HUE_SPAN: f32 = 0.2;
pub const NODE_LIGHTNESS_BASE: f32 = 0.5;
pub const NODE_LIGHTNESS_SPAN: f32 = 0.3;
pub const EDGE_HUE_SPAN: f32 = 0.15;
pub const PARTICLE_HUE_BASE: f32 = 0.5;
pub const PARTICLE_HUE_SPAN: f32 = 0.3;
pub const PARTICLE_SATURATION: f32 = 0.8;

// Edge pulse: opacity = base + sin(t * rate) * amplitude
pub const EDGE_PULSE_BASE: f32 = 0.3;
pub const EDGE_PULSE_AMPLITUDE: f32 = 0.2;
pub const EDGE_PULSE_RATE: f64 = 2.0;

// Core mesh (wireframe icosahedron with counter-rotating inner shell)
pub const CORE_RADIUS: f32 = 80.0;
pub const CORE_INNER_RADIUS: f32 = 60.0;
pub const CORE_ROT_X_PER_TICK: f32 = 0.001;
pub const CORE_ROT_Y_PER_TICK: f32 = 0.002;
pub const CORE_PULSE_RATE: f64 = 1.0;
pub const CORE_PULSE_AMPLITUDE: f32 = 0.1;

// Hologram cube
pub const CUBE_HALF_EXTENT: f32 = 120.0;
pub const CUBE_ROT_X_PER_TICK: f32 = 0.003;
pub const CUBE_ROT_Y_PER_TICK: f32 = 0.005;

// Orbiting bodies
pub const ORB_RADIUS_BASE: f32 = 300.0;
pub const ORB_RADIUS_SPAN: f32 = 200.0;
pub const ORB_Z_SPAN: f32 = 400.0;
pub const ORB_SIZE_BASE: f32 = 20.0;
pub const ORB_SIZE_SPAN: f32 = 15.0;
pub const ORB_ORBIT_SPEED_BASE: f32 = 0.0003;
pub const ORB_ORBIT_SPEED_SPAN: f32 = 0.0005;
pub const ORB_SPIN_RANGE: f32 = 0.02;
pub const ORB_SPIN_Y_FACTOR: f32 = 0.7;
pub const ORB_BOB_RATE: f64 = 0.8;
pub const ORB_BOB_AMPLITUDE: f32 = 18.0;

// Wave rings (self-relaunching expanding pulses)
pub const RING_DURATION_SEC: f64 = 3.0;
pub const RING_BASE_RADIUS: f32 = 120.0;
pub const RING_SCALE_SPAN: f32 = 3.0;
pub const RING_BASE_OPACITY: f32 = 0.6;
pub const RING_RELAUNCH_PROGRESS: f64 = 0.95;

// Data streams (helical flowing point strips)
pub const STREAM_SAMPLES: usize = 50;
pub const STREAM_RADIUS_BASE: f32 = 250.0;
pub const STREAM_RADIUS_WOBBLE: f32 = 100.0;
pub const STREAM_DEPTH: f32 = 600.0;
pub const STREAM_POINT_SIZE: f32 = 4.0;
pub const STREAM_ROT_PER_TICK: f32 = 0.001;
pub const STREAM_OFFSET_PER_TICK: f32 = 1.0;
pub const STREAM_OFFSET_WRAP: f32 = 100.0;

// Background particle field
pub const PARTICLE_EXTENT: f32 = 2000.0; // bounding cube side
pub const PARTICLE_SIZE: f32 = 2.0;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Pointer-driven rotation target
pub const POINTER_ROTATION_SCALE: f32 = 0.0001;
pub const ROTATION_SMOOTHING: f32 = 0.05;
pub const POINTER_THROTTLE_MS: f64 = 16.0;

// Conservative default when the core-count signal is unreadable
pub const FALLBACK_CPU_CORES: u32 = 2;
