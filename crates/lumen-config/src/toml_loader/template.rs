//! Default config file template with inline documentation.

/// The commented TOML written on first launch.
///
/// Every value here equals the corresponding `Default` impl, so loading the
/// template yields `LumenConfig::default()`.
pub fn default_config_toml() -> &'static str {
    r##"# Lumen configuration
# Remove or comment out any line to fall back to the built-in default.

[window]
title = "Lumen"
width = 800
height = 800
vsync = true

[render]
# Frame clear colour
clear_color = "#ff00ff"
# Specular exponent for lit programs
shininess = 32.0

# Scissor rectangle (pixels, bottom-left origin) applied while the
# scissor toggle is on
[render.scissor]
x = 200
y = 200
width = 400
height = 400

[scene]
ball_count = 10
ball_radius = 0.7
# Radius of the enlarged copy drawn for the stencil outline
outline_radius = 0.8
outline_color = [1.0, 0.5, 0.0]
# Rings and points per ring of every generated sphere (>= 2)
fidelity = 50
# Rotation added per update, in degrees
rotation_step_degrees = 0.5
# seed = 42

[scene.mirror]
enabled = false
radius = 0.25
position = [0.0, 0.0, 0.0]

[terrain]
enabled = true
cells = 64
size = 20.0
height_scale = 2.0
position = [-10.0, -3.0, -10.0]

[camera]
position = [0.0, 1.0, 6.0]
yaw_degrees = -90.0
pitch_degrees = 0.0
fov_degrees = 45.0
near = 0.1
far = 100.0
move_speed = 3.0
turn_speed_degrees = 60.0

[lighting.directional]
direction = [-1.0, -1.0, 0.0]
color = [1.0, 1.0, 1.0]
ambient_strength = 0.02
specular_strength = 1.0

[[lighting.point]]
position = [-4.0, 4.0, 5.0]
color = [0.0, 1.0, 0.0]
ambient_strength = 0.03
specular_strength = 1.0
attenuation = { constant = 1.0, linear = 0.045, exponent = 0.0075 }

[[lighting.point]]
position = [4.0, -4.0, 5.0]
color = [1.0, 0.0, 0.0]
ambient_strength = 0.03
specular_strength = 1.0
attenuation = { constant = 1.0, linear = 0.022, exponent = 0.0019 }

[assets]
root = "assets"
ball_texture = "textures/Gas.png"
terrain_texture = "textures/Terrain.jpg"
# Grayscale heightmap for the terrain; flat when empty
terrain_heightmap = ""
# +X, -X, +Y, -Y, +Z, -Z
skybox = [
    "skybox/right.jpg",
    "skybox/left.jpg",
    "skybox/top.jpg",
    "skybox/bottom.jpg",
    "skybox/back.jpg",
    "skybox/front.jpg",
]
# Directory with <program>.vert.wgsl / <program>.frag.wgsl overrides
# shader_dir = "assets/shaders"

[keybinds]
toggle_scissor = "Z"
toggle_stencil = "X"
toggle_wireframe = "C"
toggle_face_culling = "V"
reset_toggles = "R"
quit = "Escape"

[logging]
level = "info"
"##
}
