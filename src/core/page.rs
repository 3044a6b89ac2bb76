use super::navigation::{Navigator, Section, Transition};
use super::scene::{ProjectScene, SceneDescription};

/// Page-wide UI state: the active section and, while the projects view is
/// active, its mounted scene.
#[derive(Clone, Debug)]
pub struct PageState {
    navigator: Navigator,
    description: SceneDescription,
    scene: Option<ProjectScene>,
}

impl PageState {
    /// Start on the projects view with a freshly mounted scene.
    pub fn new(description: SceneDescription) -> Self {
        let navigator = Navigator::new();
        let scene = navigator
            .active()
            .uses_canvas()
            .then(|| ProjectScene::mount(&description));
        Self {
            navigator,
            description,
            scene,
        }
    }

    pub fn active(&self) -> Section {
        self.navigator.active()
    }

    pub fn description(&self) -> &SceneDescription {
        &self.description
    }

    pub fn scene(&self) -> Option<&ProjectScene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut ProjectScene> {
        self.scene.as_mut()
    }

    /// Switch sections, unmounting the projects scene when leaving it and
    /// mounting a fresh one when entering it.
    pub fn navigate(&mut self, target: Section) -> Option<Transition> {
        let transition = self.navigator.navigate(target)?;
        if transition.from.uses_canvas() && self.scene.take().is_some() {
            log::info!("[page] projects scene unmounted");
        }
        if transition.to.uses_canvas() {
            self.scene = Some(ProjectScene::mount(&self.description));
            log::info!("[page] projects scene mounted");
        }
        Some(transition)
    }
}
