pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --brand: #870A81;
  --brand-light: #9C1396;
  --brand-deep: #140021;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-400: #9CA3AF;
  --neutral-600: #4B5563;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: var(--neutral-50);
  --drawer: var(--neutral-900);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Layout */
  --nav-height: 80px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Shape */
  --radius-md: 6px;
  --radius-full: 9999px;

  /* Motion */
  --transition-fast: 150ms;
  --transition-normal: 400ms;
  --easing-standard: ease-in-out;
}

/* dark mode is switched by the "dark" class on <html> */
html.dark {
  --background: var(--brand-deep);
  --surface: #1E0A2E;
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
}
"#;
