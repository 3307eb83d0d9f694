//! Built-in notebook templates
//!
//! A template is an identifier plus a function producing its cells. New
//! templates are added with [`TemplateRegistry::register`]; callers only ever
//! look templates up by identifier.

use super::model::Cell;

/// Identifier of the template used when none (or an unknown one) is given
pub const DEFAULT_TEMPLATE: &str = "music_analysis";

/// A named, immutable cell sequence
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub id: &'static str,
    pub summary: &'static str,
    build: fn() -> Vec<Cell>,
}

impl Template {
    pub const fn new(id: &'static str, summary: &'static str, build: fn() -> Vec<Cell>) -> Self {
        Self { id, summary, build }
    }

    /// Fresh copy of the template's cells
    pub fn cells(&self) -> Vec<Cell> {
        (self.build)()
    }
}

/// Result of looking up a template identifier
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub template: &'a Template,
    /// True when the requested identifier was unknown and the default was used
    pub fell_back: bool,
}

/// Identifier -> template mapping with a default entry
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    default_id: &'static str,
}

impl TemplateRegistry {
    /// Registry with the built-in templates
    pub fn builtin() -> Self {
        let mut registry = Self {
            templates: Vec::new(),
            default_id: DEFAULT_TEMPLATE,
        };
        registry.register(Template::new(
            DEFAULT_TEMPLATE,
            "Colab GPU setup, Drive mount and project import",
            music_analysis_cells,
        ));
        registry
    }

    /// Add a template, replacing any existing one with the same identifier
    pub fn register(&mut self, template: Template) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => *slot = template,
            None => self.templates.push(template),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn default_id(&self) -> &'static str {
        self.default_id
    }

    /// Look up `id`, falling back to the default template when it is unknown
    pub fn resolve(&self, id: &str) -> Resolved<'_> {
        if let Some(template) = self.get(id) {
            return Resolved {
                template,
                fell_back: false,
            };
        }

        tracing::warn!(requested = id, fallback = self.default_id, "unknown template");
        Resolved {
            template: self.default_template(),
            fell_back: true,
        }
    }

    /// Templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    // Templates are only ever added or replaced, so the default stays present.
    fn default_template(&self) -> &Template {
        self.get(self.default_id)
            .unwrap_or_else(|| unreachable!("default template is always registered"))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn music_analysis_cells() -> Vec<Cell> {
    vec![
        Cell::markdown(&[
            "# 🎵 음악 분석 노트북",
            "VS Code에서 생성된 코랩 호환 노트북",
            "",
            "## 설정",
            "1. 런타임 → GPU 변경",
            "2. 구글 드라이브 마운트",
            "3. GCP 서비스 계정 업로드",
        ]),
        Cell::code(&[
            "# 🚀 코랩 환경 설정",
            "!pip install librosa google-cloud-storage google-cloud-firestore",
            "",
            "# 구글 드라이브 마운트",
            "from google.colab import drive",
            "drive.mount('/content/drive')",
            "",
            "# GCP 인증 설정",
            "import os",
            "os.environ['GOOGLE_APPLICATION_CREDENTIALS'] = '/content/service-account.json'",
        ]),
        Cell::code(&[
            "# VS Code 프로젝트와 동기화",
            "import sys",
            "sys.path.append('/content/drive/MyDrive/techno-prompt')",
            "",
            "# 프로젝트 파일 임포트",
            "# from scripts.gcp.colab_bridge import upload_analysis_result",
        ]),
    ]
}
