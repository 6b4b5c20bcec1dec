use foh_domain::motion;
use foh_domain::site::SiteConfig;

const BASE: &str = r"
* { box-sizing: border-box; }
html, body { margin: 0; min-height: 100%; font-family: 'Inter', system-ui, sans-serif; }
html.light body { background: var(--color-background); color: var(--color-text); }
html.dark body { background: #0b1120; color: #e5e7eb; }
h1, h2, h3 { font-family: 'Montserrat', sans-serif; }

.page { position: relative; min-height: 100vh; display: flex; flex-direction: column; overflow: hidden; }
.topbar { display: flex; justify-content: space-between; align-items: center; padding: 1.5rem 2rem; z-index: 10; }
.wordmark { font-family: 'Montserrat', sans-serif; font-weight: 700; font-size: 1.25rem; letter-spacing: 0.05em; }

.hero { position: relative; flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 2rem; gap: 1.5rem; }
.hero-bg { position: absolute; inset: 0; pointer-events: none; z-index: -1; }
.blob { position: absolute; border-radius: 9999px; filter: blur(64px); opacity: 0.35; }
.blob-primary { width: 24rem; height: 24rem; top: 10%; left: 10%; background: var(--color-primary); }
.blob-secondary { width: 20rem; height: 20rem; bottom: 10%; right: 10%; background: var(--color-secondary); }
.blob-accent { width: 16rem; height: 16rem; top: 40%; right: 35%; background: #6366f1; }
.hero h1 { font-size: clamp(2rem, 5vw, 3.5rem); margin: 0; }
.hero .tagline { color: var(--color-primary); }
.hero p { max-width: 40rem; font-size: 1.125rem; opacity: 0.85; margin: 0; }

.features { position: relative; width: 100%; max-width: 40rem; min-height: 9rem; }
.feature-slide.leaving { position: absolute; top: 0; left: 0; right: 0; pointer-events: none; }
.feature-slide { padding: 1.5rem; border-radius: 1rem; background: rgba(255, 255, 255, 0.6); }
html.dark .feature-slide { background: rgba(17, 24, 39, 0.6); }
.feature-slide h3 { margin: 0 0 0.5rem; color: var(--color-primary); }
.feature-slide p { margin: 0; }
.dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
.dot { width: 0.625rem; height: 0.625rem; border-radius: 9999px; border: none; padding: 0; cursor: pointer; background: rgba(100, 116, 139, 0.4); }
.dot.active { background: var(--color-primary); width: 1.5rem; }

.btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; border-radius: 0.5rem; font-weight: 600; cursor: pointer; border: 2px solid transparent; transition: background 0.2s, color 0.2s; }
.btn-sm { padding: 0.375rem 0.75rem; font-size: 0.875rem; }
.btn-md { padding: 0.625rem 1.25rem; font-size: 1rem; }
.btn-lg { padding: 0.875rem 1.75rem; font-size: 1.125rem; }
.btn-primary { background: var(--color-primary); color: #fff; }
.btn-secondary { background: var(--color-secondary); color: #fff; }
.btn-outline { background: transparent; border-color: var(--color-primary); color: var(--color-primary); }
.btn-ghost { background: transparent; color: inherit; }
.btn-full { width: 100%; }
.btn-disabled { opacity: 0.5; cursor: not-allowed; }
.spinner { width: 1rem; height: 1rem; border-radius: 9999px; border: 2px solid currentColor; border-right-color: transparent; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

.theme-toggle { width: 2.5rem; height: 2.5rem; border-radius: 9999px; border: none; cursor: pointer; background: rgba(100, 116, 139, 0.15); color: inherit; display: inline-flex; align-items: center; justify-content: center; }
.theme-toggle svg { width: 1.25rem; height: 1.25rem; }

.modal-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 50; padding: 1rem; }
.modal { position: relative; width: 100%; max-width: 28rem; border-radius: 1rem; padding: 2rem; background: #fff; }
html.dark .modal { background: #111827; }
.modal h2 { margin: 0 0 0.25rem; }
.modal .subtitle { margin: 0 0 1.5rem; opacity: 0.75; }
.modal-close { position: absolute; top: 1rem; right: 1rem; }
.form-banner { padding: 0.75rem; border-radius: 0.5rem; background: rgba(239, 68, 68, 0.1); color: #dc2626; margin-bottom: 1rem; }
.success { text-align: center; padding: 1.5rem 0; }
.success .check { font-size: 2.5rem; color: #16a34a; }

.field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
.field label { font-weight: 500; font-size: 0.875rem; }
.field input, .field textarea { font: inherit; padding: 0.625rem 0.75rem; border-radius: 0.5rem; border: 1px solid rgba(100, 116, 139, 0.4); background: transparent; color: inherit; }
.field.invalid input, .field.invalid textarea { border-color: #dc2626; }
.field .error { color: #dc2626; font-size: 0.8125rem; }
.field .helper { opacity: 0.7; font-size: 0.8125rem; }

.footer { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; padding: 1.5rem 2rem; font-size: 0.875rem; opacity: 0.8; }
.footer a { color: inherit; }
.footer .social { display: flex; gap: 1rem; }
";

/// Full page stylesheet: brand palette, layout and every motion keyframe.
#[must_use]
pub fn stylesheet(site: &SiteConfig) -> String {
    format!("{}\n{BASE}\n{}", site.palette_css(), motion::stylesheet())
}
