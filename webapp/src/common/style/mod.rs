use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const APP_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-display);
  color: var(--text);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application-specific styles */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-links {
  display: flex;
  gap: var(--space-4);
}

.nav-link {
  color: var(--subtle-text);
  font-weight: 500;
}

.nav-link.active {
  color: var(--primary);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
}

/* Home page */
.hero {
  text-align: center;
  padding: var(--space-12) 0;
}

.hero-title {
  font-size: 2.5rem;
  margin-bottom: var(--space-3);
}

.hero-subtitle {
  color: var(--subtle-text);
  margin-bottom: var(--space-6);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
}

.steps-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.step-number {
  color: var(--primary);
  font-size: 1.5rem;
  font-weight: 600;
}

/* Report form */
.report-form {
  margin-top: var(--space-6);
}

.location-toolbar {
  display: flex;
  gap: var(--space-2);
  margin-top: var(--space-2);
}

.location-toolbar .form-input {
  flex: 1;
}

.location-map {
  height: 280px;
  margin-top: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.map-instruction {
  margin-top: var(--space-2);
  font-size: 0.875rem;
  color: var(--subtle-text);
}

.detected-location {
  margin-top: var(--space-2);
  font-weight: 500;
}

/* Photo previews */
.photo-previews {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-3);
  margin-top: var(--space-3);
}

.photo-preview {
  position: relative;
}

.photo-preview img {
  width: 100%;
  height: 96px;
  object-fit: cover;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.photo-remove {
  position: absolute;
  top: var(--space-1);
  right: var(--space-1);
  height: 24px;
  width: 24px;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--error);
  color: white;
  border: none;
  border-radius: var(--radius-full);
  font-weight: 600;
  cursor: pointer;
  opacity: 0;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.photo-preview:hover .photo-remove {
  opacity: 1;
}

/* Thank-you page */
.thankyou-card {
  max-width: 420px;
  margin: var(--space-8) auto 0;
  text-align: center;
}

.thankyou-card h1 {
  margin-bottom: var(--space-3);
}

.thankyou-card p {
  color: var(--subtle-text);
  margin-bottom: var(--space-4);
}

.thankyou-card .form-input {
  text-align: center;
  font-weight: 600;
}
"#,
);
