//! Build script for quadlink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates link.toml at compile time
//! - Generates the machine configuration constant the firmware includes

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use quadlink_core::config::{ActuatorPins, LimitPolicy, MachineConfig, PinConfig};
use quadlink_core::link::Side;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    setup_linker(&out_dir);
    let config = load_config();
    write_config(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate link.toml
fn load_config() -> MachineConfig {
    println!("cargo:rerun-if-changed=link.toml");

    let config_path = Path::new("link.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: link.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a link.toml configuration file.           ║\n\
            ║  Please create one in the quadlink-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read link.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: MachineConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid link.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: link.toml failed validation                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{:?}", e))
        );
    }

    println!("cargo:warning=link.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `machine_config.rs` with a `MACHINE_CONFIG` constant
fn write_config(out_dir: &Path, config: &MachineConfig) {
    let link = &config.link;
    let joystick = &config.joystick;
    let stepper = &config.stepper;
    let control = &config.control;
    let pins = &config.pins;

    let limit_policy = match link.limit_policy {
        LimitPolicy::AllSensors => "LimitPolicy::AllSensors".to_string(),
        LimitPolicy::Designated(side) => format!("LimitPolicy::Designated({})", side_expr(side)),
    };

    let status_led = match &pins.status_led {
        Some(led) => format!("Some({})", pin_expr(led)),
        None => "None".to_string(),
    };

    let source = format!(
        "// Generated from link.toml by build.rs\n\
        #[allow(unused_imports)]\n\
        use quadlink_core::config::{{\n    \
            ActuatorPins, ControlConfig, JoystickConfig, LimitPolicy, LinkConfig, MachineConfig,\n    \
            PinConfig, PinMap, StepperConfig,\n\
        }};\n\
        #[allow(unused_imports)]\n\
        use quadlink_core::link::{{PerSide, Side}};\n\
        \n\
        pub const MACHINE_CONFIG: MachineConfig = MachineConfig {{\n    \
            version: {version},\n    \
            link: LinkConfig {{\n        \
                slow_speed: {slow:?},\n        \
                fast_speed: {fast:?},\n        \
                outward_speed_factor: {factor:?},\n        \
                max_position: {max_position},\n        \
                center_travel_ticks: {center},\n        \
                calibration_timeout_rounds: {timeout},\n        \
                limit_policy: {limit_policy},\n    \
            }},\n    \
            joystick: JoystickConfig {{\n        \
                center: {js_center},\n        \
                slow_threshold: {js_slow},\n        \
                fast_threshold: {js_fast},\n        \
                invert_horizontal: {inv_h},\n        \
                invert_vertical: {inv_v},\n    \
            }},\n    \
            stepper: StepperConfig {{\n        \
                max_speed: {max_speed:?},\n        \
                pulse_width_ns: {pulse},\n    \
            }},\n    \
            control: ControlConfig {{\n        \
                tick_hz: {tick_hz},\n        \
                button_debounce_ticks: {debounce},\n        \
                status_interval_ticks: {status_interval},\n    \
            }},\n    \
            pins: PinMap {{\n        \
                actuators: PerSide::new(\n            \
                    {up},\n            \
                    {right},\n            \
                    {down},\n            \
                    {left},\n        \
                ),\n        \
                arm_button: {arm},\n        \
                status_led: {status_led},\n    \
            }},\n\
        }};\n",
        version = config.version,
        slow = link.slow_speed,
        fast = link.fast_speed,
        factor = link.outward_speed_factor,
        max_position = link.max_position,
        center = link.center_travel_ticks,
        timeout = link.calibration_timeout_rounds,
        limit_policy = limit_policy,
        js_center = joystick.center,
        js_slow = joystick.slow_threshold,
        js_fast = joystick.fast_threshold,
        inv_h = joystick.invert_horizontal,
        inv_v = joystick.invert_vertical,
        max_speed = stepper.max_speed,
        pulse = stepper.pulse_width_ns,
        tick_hz = control.tick_hz,
        debounce = control.button_debounce_ticks,
        status_interval = control.status_interval_ticks,
        up = actuator_expr(&pins.actuators.up),
        right = actuator_expr(&pins.actuators.right),
        down = actuator_expr(&pins.actuators.down),
        left = actuator_expr(&pins.actuators.left),
        arm = pin_expr(&pins.arm_button),
        status_led = status_led,
    );

    fs::write(out_dir.join("machine_config.rs"), source).unwrap();
}

fn side_expr(side: Side) -> String {
    format!("Side::{:?}", side)
}

fn pin_expr(pin: &PinConfig) -> String {
    format!(
        "PinConfig {{ pin: {}, inverted: {}, pull_up: {} }}",
        pin.pin, pin.inverted, pin.pull_up
    )
}

fn actuator_expr(pins: &ActuatorPins) -> String {
    format!(
        "ActuatorPins {{ step: {}, dir: {}, endstop: {} }}",
        pin_expr(&pins.step),
        pin_expr(&pins.dir),
        pin_expr(&pins.endstop)
    )
}
