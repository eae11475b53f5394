pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #007bff;          /* Civic blue for primary actions */
  --primary-dark: #0056b3;     /* Hover/active shade */
  --action-green: #28a745;     /* Confirmation and submit actions */
  --action-green-dark: #1e7e34;
  --error: #dc3545;

  /* Surfaces and Text (light theme defaults) */
  --background: #f8f9fa;
  --surface: #ffffff;
  --text: #212529;
  --subtle-text: #6c757d;
  --border: #dee2e6;

  /* Typography */
  --font-display: "Public Sans", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;

  /* Layout */
  --header-height: 60px;
  --container-width: 960px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Border Radius */
  --radius: 0.25rem;
  --radius-lg: 0.5rem;
  --radius-xl: 0.75rem;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark theme, activated by a `dark` class on the document root */
.dark {
  --background: #343a40;
  --surface: #495057;
  --text: #f8f9fa;
  --subtle-text: #adb5bd;
  --border: #495057;
}"#;
