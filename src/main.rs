//! Folio: résumé page over an animated glass-cube backdrop. Runs the resume_scene app.

use bevy::prelude::AppExit;
use resume_scene::ResumeSceneBuilder;

fn main() -> AppExit {
    let _ = dotenvy::dotenv();
    ResumeSceneBuilder::from_env().build().run()
}
