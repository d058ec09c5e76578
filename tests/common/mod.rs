//! Shared fakes for integration tests
#![allow(dead_code)]

use std::collections::HashSet;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use toast_notifier::application::ports::{
    AppLauncher, FacilityError, LaunchError, LibraryLoader, NotificationListener, PathError,
    PlatformPaths, ToastBuilder, ToastEventSink, ToastFacility,
};
use toast_notifier::application::{
    CallbackDispatcher, DismissalPolicy, FacilityHandle, IdentifierRegistry, NotificationCenter,
};
use toast_notifier::domain::{
    Action, AppIdentity, DismissalReason, Notification, SoundPath, SoundProfile, SystemId,
};

/// What the fake facility displayed
#[derive(Debug, Clone)]
pub struct ShownToast {
    pub id: SystemId,
    pub title: String,
    pub message: String,
    pub image: Option<PathBuf>,
    pub sound: Option<SoundProfile>,
    pub buttons: Vec<String>,
}

/// Counters and switches shared by the fake facility and its builders
pub struct FakeState {
    next_id: AtomicI64,
    pub fail_initialize: AtomicBool,
    pub fail_callbacks: AtomicBool,
    pub fail_builder: AtomicBool,
    pub fail_image: AtomicBool,
    pub fail_sound: AtomicBool,
    pub fail_show: AtomicBool,
    pub fail_hide: AtomicBool,
    pub failing_buttons: Mutex<HashSet<String>>,
    pub initialized: AtomicUsize,
    pub identity: Mutex<Option<AppIdentity>>,
    pub sink: Mutex<Option<Arc<dyn ToastEventSink>>>,
    pub shown: Mutex<Vec<ShownToast>>,
    pub hidden: Mutex<Vec<SystemId>>,
    pub builders_released: AtomicUsize,
    hide_hook: Mutex<Option<HideHook>>,
}

/// Runs inside `hide`, while the caller still holds the entity lock
pub type HideHook = Box<dyn Fn(SystemId) + Send + Sync>;

/// In-memory native facility with switchable failures
pub struct FakeFacility {
    state: Arc<FakeState>,
}

impl Deref for FakeFacility {
    type Target = FakeState;

    fn deref(&self) -> &FakeState {
        &self.state
    }
}

impl FakeFacility {
    pub fn new() -> Arc<Self> {
        Self::starting_at(42)
    }

    pub fn starting_at(first_id: i64) -> Arc<Self> {
        Arc::new(Self {
            state: Arc::new(FakeState {
                next_id: AtomicI64::new(first_id),
                fail_initialize: AtomicBool::new(false),
                fail_callbacks: AtomicBool::new(false),
                fail_builder: AtomicBool::new(false),
                fail_image: AtomicBool::new(false),
                fail_sound: AtomicBool::new(false),
                fail_show: AtomicBool::new(false),
                fail_hide: AtomicBool::new(false),
                failing_buttons: Mutex::new(HashSet::new()),
                initialized: AtomicUsize::new(0),
                identity: Mutex::new(None),
                sink: Mutex::new(None),
                shown: Mutex::new(Vec::new()),
                hidden: Mutex::new(Vec::new()),
                builders_released: AtomicUsize::new(0),
                hide_hook: Mutex::new(None),
            }),
        })
    }

    pub fn fail_button(&self, label: &str) {
        self.failing_buttons.lock().insert(label.to_string());
    }

    pub fn on_hide(&self, hook: impl Fn(SystemId) + Send + Sync + 'static) {
        *self.hide_hook.lock() = Some(Box::new(hook));
    }

    pub fn last_shown(&self) -> Option<ShownToast> {
        self.shown.lock().last().cloned()
    }

    pub fn released(&self) -> usize {
        self.builders_released.load(Ordering::SeqCst)
    }

    fn event_sink(&self) -> Arc<dyn ToastEventSink> {
        self.sink.lock().clone().expect("callbacks not registered")
    }

    /// Deliver an activation the way the native thread would.
    pub fn activate(&self, id: SystemId, action_index: i32) {
        self.event_sink().activated(id, action_index);
    }

    /// Deliver a dismissal the way the native thread would.
    pub fn dismiss(&self, id: SystemId, reason: DismissalReason) {
        self.event_sink().dismissed(id, reason);
    }
}

impl ToastFacility for FakeFacility {
    fn initialize(&self, identity: &AppIdentity) -> Result<(), FacilityError> {
        self.initialized.fetch_add(1, Ordering::SeqCst);
        if self.fail_initialize.load(Ordering::SeqCst) {
            return Err(FacilityError::Initialize("shortcut creation failed".to_string()));
        }
        *self.identity.lock() = Some(identity.clone());
        Ok(())
    }

    fn register_callbacks(&self, sink: Arc<dyn ToastEventSink>) -> Result<(), FacilityError> {
        if self.fail_callbacks.load(Ordering::SeqCst) {
            return Err(FacilityError::Callbacks("rejected".to_string()));
        }
        *self.sink.lock() = Some(sink);
        Ok(())
    }

    fn new_builder(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Box<dyn ToastBuilder>, FacilityError> {
        if self.fail_builder.load(Ordering::SeqCst) {
            return Err(FacilityError::Builder("out of memory".to_string()));
        }
        Ok(Box::new(FakeBuilder {
            state: Arc::clone(&self.state),
            title: title.to_string(),
            message: message.to_string(),
            image: None,
            sound: None,
            buttons: Vec::new(),
        }))
    }

    fn hide(&self, id: SystemId) -> Result<(), FacilityError> {
        self.hidden.lock().push(id);
        if let Some(hook) = self.hide_hook.lock().as_ref() {
            hook(id);
        }
        if self.fail_hide.load(Ordering::SeqCst) {
            return Err(FacilityError::Hide(id));
        }
        Ok(())
    }
}

pub struct FakeBuilder {
    state: Arc<FakeState>,
    title: String,
    message: String,
    image: Option<PathBuf>,
    sound: Option<SoundProfile>,
    buttons: Vec<String>,
}

impl ToastBuilder for FakeBuilder {
    fn set_image(&mut self, path: &Path) -> Result<(), FacilityError> {
        if self.state.fail_image.load(Ordering::SeqCst) {
            return Err(FacilityError::Image("unsupported format".to_string()));
        }
        self.image = Some(path.to_path_buf());
        Ok(())
    }

    fn set_sound(&mut self, profile: SoundProfile, _path: SoundPath) -> Result<(), FacilityError> {
        if self.state.fail_sound.load(Ordering::SeqCst) {
            return Err(FacilityError::Sound("no audio".to_string()));
        }
        self.sound = Some(profile);
        Ok(())
    }

    fn add_button(&mut self, label: &str) -> Result<(), FacilityError> {
        if self.state.failing_buttons.lock().contains(label) {
            return Err(FacilityError::Button(label.to_string()));
        }
        self.buttons.push(label.to_string());
        Ok(())
    }

    fn show(&mut self) -> Result<SystemId, FacilityError> {
        if self.state.fail_show.load(Ordering::SeqCst) {
            return Err(FacilityError::Show("notifications disabled".to_string()));
        }
        let id = SystemId::new(self.state.next_id.fetch_add(1, Ordering::SeqCst));
        self.state.shown.lock().push(ShownToast {
            id,
            title: self.title.clone(),
            message: self.message.clone(),
            image: self.image.clone(),
            sound: self.sound,
            buttons: self.buttons.clone(),
        });
        Ok(id)
    }
}

impl Drop for FakeBuilder {
    fn drop(&mut self) {
        self.state.builders_released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Loader handing out the same fake facility
pub struct FakeLoader {
    pub facility: Arc<FakeFacility>,
    pub loads: AtomicUsize,
    pub fail: AtomicBool,
}

impl FakeLoader {
    pub fn new(facility: Arc<FakeFacility>) -> Arc<Self> {
        Arc::new(Self {
            facility,
            loads: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        })
    }
}

impl LibraryLoader for FakeLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn ToastFacility>, FacilityError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(FacilityError::Load(format!("{}: bad image", path.display())));
        }
        Ok(self.facility.clone())
    }
}

/// Paths with fixed answers
pub struct FakePaths {
    pub library: Result<PathBuf, PathError>,
    pub icon: Result<PathBuf, PathError>,
}

impl FakePaths {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            library: Ok(PathBuf::from("/data/updates/windows_amd64/notifier/wintoast.dll")),
            icon: Ok(PathBuf::from("/data/icons/app.ico")),
        })
    }

    pub fn without_data_dir() -> Arc<Self> {
        Arc::new(Self {
            library: Err(PathError::EmptyDataDir),
            icon: Err(PathError::EmptyDataDir),
        })
    }

    pub fn without_icon() -> Arc<Self> {
        Arc::new(Self {
            library: Ok(PathBuf::from("/data/wintoast.dll")),
            icon: Err(PathError::NotFound(PathBuf::from("/data/icons/app.ico"))),
        })
    }
}

impl PlatformPaths for FakePaths {
    fn resolve_library_path(&self) -> Result<PathBuf, PathError> {
        self.library.clone()
    }

    fn resolve_icon_path(&self) -> Result<PathBuf, PathError> {
        self.icon.clone()
    }
}

/// Launcher counting launches
#[derive(Default)]
pub struct CountingLauncher {
    pub launches: AtomicUsize,
}

impl AppLauncher for CountingLauncher {
    fn launch(&self) -> Result<(), LaunchError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Listener recording every outcome
#[derive(Default)]
pub struct RecordingListener {
    pub selected: Mutex<Vec<String>>,
    pub clicked: AtomicUsize,
    pub dismissed: Mutex<Vec<DismissalReason>>,
}

impl RecordingListener {
    pub fn outcomes(&self) -> usize {
        self.selected.lock().len() + self.clicked.load(Ordering::SeqCst) + self.dismissed.lock().len()
    }
}

impl NotificationListener for RecordingListener {
    fn action_selected(&self, _notification: &Arc<Notification>, action_id: &str) {
        self.selected.lock().push(action_id.to_string());
    }

    fn clicked(&self, _notification: &Arc<Notification>) {
        self.clicked.fetch_add(1, Ordering::SeqCst);
    }

    fn dismissed(&self, _notification: &Arc<Notification>, reason: DismissalReason) {
        self.dismissed.lock().push(reason);
    }
}

pub fn identity() -> AppIdentity {
    AppIdentity {
        app_name: "Toast Notifier".to_string(),
        vendor: "Test Vendor".to_string(),
        product: "Toast".to_string(),
        sub_product: "notifier".to_string(),
        version: "1.2.3".to_string(),
    }
}

/// Fully wired core over fakes
pub struct Harness {
    pub facility: Arc<FakeFacility>,
    pub loader: Arc<FakeLoader>,
    pub launcher: Arc<CountingLauncher>,
    pub listener: Arc<RecordingListener>,
    pub registry: Arc<IdentifierRegistry>,
    pub dispatcher: Arc<CallbackDispatcher>,
    pub handle: Arc<FacilityHandle>,
    pub center: NotificationCenter,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_paths(FakePaths::ok())
    }

    pub fn with_paths(paths: Arc<FakePaths>) -> Self {
        Self::build(paths, DismissalPolicy::default())
    }

    pub fn with_policy(policy: DismissalPolicy) -> Self {
        Self::build(FakePaths::ok(), policy)
    }

    fn build(paths: Arc<FakePaths>, policy: DismissalPolicy) -> Self {
        let facility = FakeFacility::new();
        let loader = FakeLoader::new(facility.clone());
        let launcher = Arc::new(CountingLauncher::default());
        let listener = Arc::new(RecordingListener::default());
        let registry = Arc::new(IdentifierRegistry::new());

        let dispatcher = Arc::new(
            CallbackDispatcher::new(registry.clone(), launcher.clone())
                .with_policy(policy)
                .with_listener(listener.clone()),
        );
        let handle = Arc::new(FacilityHandle::new(
            identity(),
            paths.clone(),
            loader.clone(),
            dispatcher.clone(),
        ));
        let center = NotificationCenter::new(handle.clone(), registry.clone(), paths);

        Self {
            facility,
            loader,
            launcher,
            listener,
            registry,
            dispatcher,
            handle,
            center,
        }
    }

    /// Show a prompt with "open" and "block" actions.
    pub fn show_prompt(&self) -> Arc<Notification> {
        let notification = prompt();
        self.center.show(&notification);
        notification
    }
}

pub fn prompt() -> Arc<Notification> {
    Arc::new(
        Notification::new(
            "Connection attempt",
            "example.com wants to connect",
            vec![Action::new("open", "Open"), Action::new("block", "Block")],
        )
        .with_event_id("filter:prompt"),
    )
}
