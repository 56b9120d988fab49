use backend::config::{SceneConfig, Strictness, WindowConfig};
use backend::error::BackendError;
use backend::gl;
use backend::glutils::{drain_gl_errors, CallSite, Stage};
use backend::scene::Scene;
use backend::shaders::{ShaderProgram, ShaderStage, FRAGMENT_SHADER_SRC, POSITION_ATTRIB};
use backend::system::System;

// SDL allows a single window/context per process here, so everything that
// needs a live context runs in one test.
#[test]
#[ignore = "needs a display and an OpenGL 3.3 driver"]
fn triangle_on_live_context() {
    let system = System::new(&WindowConfig::default()).expect("window and context");

    let scene = Scene::build(&SceneConfig {
        strictness: Strictness::Strict,
    })
    .expect("scene builds with valid shaders");
    assert!(scene.program().attrib_location(POSITION_ATTRIB) >= 0);
    scene.render_frame();
    system.swap_buffers();

    let site = CallSite {
        label: "gl::BindBuffer(0xdead, 1)",
        file: file!(),
        line: line!(),
    };
    drain_gl_errors(&site, Stage::Before);
    unsafe { gl::BindBuffer(0xdead, 1) };
    assert!(drain_gl_errors(&site, Stage::After) >= 1);

    match ShaderProgram::from_str("#version 150\nvoid main( {", FRAGMENT_SHADER_SRC, Strictness::Strict) {
        Err(BackendError::ShaderCompile { stage, .. }) => assert_eq!(stage, ShaderStage::Vertex),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("broken vertex shader compiled"),
    }

    // lenient mode logs the failure and carries on
    let lenient = ShaderProgram::from_str("#version 150\nvoid main( {", FRAGMENT_SHADER_SRC, Strictness::Lenient)
        .expect("lenient build never fails");
    lenient.delete();

    scene.delete();
    system.terminate();
}
