use backend::config::{SceneConfig, WindowConfig};
use backend::logging::{init_logging, LoggingConfig};
use backend::scene::Scene;
use backend::system::System;

const EXIT_FAILURE: i32 = -1;

fn main() {
    init_logging(LoggingConfig::default());

    let mut system = match System::new(&WindowConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let scene = match Scene::build(&SceneConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            system.terminate();
            std::process::exit(EXIT_FAILURE);
        }
    };

    while !system.should_close() {
        scene.render_frame();
        system.swap_buffers();
        system.poll_events();
    }

    scene.delete();
    system.terminate();
}
