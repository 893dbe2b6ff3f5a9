use std::collections::{BTreeMap, HashMap};

/// Default analysis backend.
pub const DEFAULT_BACKEND_URL: &str = "https://rhda.rhcloud.com";

/// Tag identifying this integration to the backend.
pub const REQUEST_SOURCE: &str = "build-pipeline";

pub const BACKEND_URL: &str = "TRUSTIFY_DA_BACKEND_URL";
pub const TOKEN: &str = "TRUST_DA_TOKEN";
pub const SOURCE: &str = "TRUST_DA_SOURCE";
pub const CONSENT_TELEMETRY: &str = "CONSENT_TELEMETRY";

pub const DEBUG: &str = "TRUSTIFY_DA_DEBUG";
pub const PROXY_URL: &str = "TRUSTIFY_DA_PROXY_URL";
pub const MVN_PATH: &str = "TRUSTIFY_DA_MVN_PATH";
pub const GRADLE_PATH: &str = "TRUSTIFY_DA_GRADLE_PATH";
pub const NPM_PATH: &str = "TRUSTIFY_DA_NPM_PATH";
pub const YARN_PATH: &str = "TRUSTIFY_DA_YARN_PATH";
pub const PNPM_PATH: &str = "TRUSTIFY_DA_PNPM_PATH";
pub const GO_PATH: &str = "TRUSTIFY_DA_GO_PATH";
pub const MVN_USER_SETTINGS: &str = "TRUSTIFY_DA_MVN_USER_SETTINGS";
pub const MVN_LOCAL_REPO: &str = "TRUSTIFY_DA_MVN_LOCAL_REPO";
pub const PYTHON3_PATH: &str = "TRUSTIFY_DA_PYTHON3_PATH";
pub const PIP3_PATH: &str = "TRUSTIFY_DA_PIP3_PATH";
pub const GO_MVS_LOGIC_ENABLED: &str = "TRUSTIFY_DA_GO_MVS_LOGIC_ENABLED";
pub const MATCH_MANIFEST_VERSIONS: &str = "MATCH_MANIFEST_VERSIONS";
pub const PIP_PATH: &str = "TRUSTIFY_DA_PIP_PATH";
pub const PIP_FREEZE: &str = "TRUSTIFY_DA_PIP_FREEZE";
pub const PIP_SHOW: &str = "TRUSTIFY_DA_PIP_SHOW";
pub const PIP_USE_DEP_TREE: &str = "TRUSTIFY_DA_PIP_USE_DEP_TREE";
pub const PYTHON_INSTALL_BEST_EFFORTS: &str = "TRUSTIFY_DA_PYTHON_INSTALL_BEST_EFFORTS";
pub const PYTHON_VIRTUAL_ENV: &str = "TRUSTIFY_DA_PYTHON_VIRTUAL_ENV";
pub const IGNORE_METHOD: &str = "TRUSTIFY_DA_IGNORE_METHOD";

/// Analysis environment for a single run.
///
/// Built fresh from the caller's environment mapping before every analysis,
/// so values configured for one run can never leak into the next. Passed by
/// reference to the command executor invoking the analysis CLI.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AnalysisConfig {
    /// Analysis backend, [`DEFAULT_BACKEND_URL`] unless overridden.
    pub backend_url: String,
    pub token: Option<String>,
    pub consent_telemetry: Option<String>,
    pub debug: Option<String>,
    pub proxy_url: Option<String>,
    pub mvn_path: Option<String>,
    pub gradle_path: Option<String>,
    pub npm_path: Option<String>,
    pub yarn_path: Option<String>,
    pub pnpm_path: Option<String>,
    pub go_path: Option<String>,
    pub mvn_user_settings: Option<String>,
    pub mvn_local_repo: Option<String>,
    pub python3_path: Option<String>,
    pub pip3_path: Option<String>,
    pub go_mvs_logic_enabled: Option<String>,
    pub match_manifest_versions: Option<String>,
    pub pip_path: Option<String>,
    pub pip_freeze: Option<String>,
    pub pip_show: Option<String>,
    pub pip_use_dep_tree: Option<String>,
    pub python_install_best_efforts: Option<String>,
    pub python_virtual_env: Option<String>,
    pub ignore_method: Option<String>,
}

impl AnalysisConfig {
    /// Build the analysis environment from an environment mapping.
    ///
    /// Recognized keys present in the mapping are taken over; all others
    /// stay unset. Without a mapping only the backend URL default is set.
    pub fn from_env(env: Option<&HashMap<String, String>>) -> Self {
        let get = |key| env.and_then(|env| env.get(key)).cloned();

        Self {
            backend_url: get(BACKEND_URL).unwrap_or_else(|| DEFAULT_BACKEND_URL.into()),
            token: get(TOKEN),
            consent_telemetry: get(CONSENT_TELEMETRY),
            debug: get(DEBUG),
            proxy_url: get(PROXY_URL),
            mvn_path: get(MVN_PATH),
            gradle_path: get(GRADLE_PATH),
            npm_path: get(NPM_PATH),
            yarn_path: get(YARN_PATH),
            pnpm_path: get(PNPM_PATH),
            go_path: get(GO_PATH),
            mvn_user_settings: get(MVN_USER_SETTINGS),
            mvn_local_repo: get(MVN_LOCAL_REPO),
            python3_path: get(PYTHON3_PATH),
            pip3_path: get(PIP3_PATH),
            go_mvs_logic_enabled: get(GO_MVS_LOGIC_ENABLED),
            match_manifest_versions: get(MATCH_MANIFEST_VERSIONS),
            pip_path: get(PIP_PATH),
            pip_freeze: get(PIP_FREEZE),
            pip_show: get(PIP_SHOW),
            pip_use_dep_tree: get(PIP_USE_DEP_TREE),
            python_install_best_efforts: get(PYTHON_INSTALL_BEST_EFFORTS),
            python_virtual_env: get(PYTHON_VIRTUAL_ENV),
            ignore_method: get(IGNORE_METHOD),
        }
    }

    /// Render the environment handed to the analysis CLI invocation.
    ///
    /// Contains the backend URL, the request source tag, and every
    /// configured value; unset fields are omitted entirely.
    pub fn env_vars(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        vars.insert(BACKEND_URL.into(), self.backend_url.clone());
        vars.insert(SOURCE.into(), REQUEST_SOURCE.into());

        for (key, value) in self.optional_vars() {
            if let Some(value) = value {
                vars.insert(key.into(), value.clone());
            }
        }

        vars
    }

    /// All optional fields with their environment key.
    fn optional_vars(&self) -> [(&'static str, &Option<String>); 23] {
        [
            (TOKEN, &self.token),
            (CONSENT_TELEMETRY, &self.consent_telemetry),
            (DEBUG, &self.debug),
            (PROXY_URL, &self.proxy_url),
            (MVN_PATH, &self.mvn_path),
            (GRADLE_PATH, &self.gradle_path),
            (NPM_PATH, &self.npm_path),
            (YARN_PATH, &self.yarn_path),
            (PNPM_PATH, &self.pnpm_path),
            (GO_PATH, &self.go_path),
            (MVN_USER_SETTINGS, &self.mvn_user_settings),
            (MVN_LOCAL_REPO, &self.mvn_local_repo),
            (PYTHON3_PATH, &self.python3_path),
            (PIP3_PATH, &self.pip3_path),
            (GO_MVS_LOGIC_ENABLED, &self.go_mvs_logic_enabled),
            (MATCH_MANIFEST_VERSIONS, &self.match_manifest_versions),
            (PIP_PATH, &self.pip_path),
            (PIP_FREEZE, &self.pip_freeze),
            (PIP_SHOW, &self.pip_show),
            (PIP_USE_DEP_TREE, &self.pip_use_dep_tree),
            (PYTHON_INSTALL_BEST_EFFORTS, &self.python_install_best_efforts),
            (PYTHON_VIRTUAL_ENV, &self.python_virtual_env),
            (IGNORE_METHOD, &self.ignore_method),
        ]
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_env(None)
    }
}
