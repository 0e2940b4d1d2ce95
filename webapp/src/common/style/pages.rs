pub const PAGE_STYLES: &str = r#"
.site-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page-content {
  flex: 1;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Hero banners sit under the transparent bar on dark pages */
.hero {
  padding: calc(var(--nav-height) + var(--space-16)) 0 var(--space-16);
  background: linear-gradient(135deg, var(--brand-deep), var(--brand));
  color: var(--text-inverse);
  text-align: center;
}

.hero.light {
  background: var(--background);
  color: var(--text-primary);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.25rem;
  opacity: 0.85;
  margin-bottom: var(--space-8);
}

.section {
  padding: var(--space-12) 0;
}

.card-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}

.card {
  background-color: var(--surface);
  border-radius: var(--radius-md);
  padding: var(--space-6);
}

.card h3 {
  margin-bottom: var(--space-2);
}

.start-project {
  min-height: 100vh;
  padding: var(--space-16) var(--space-4);
}

.start-project form {
  display: grid;
  gap: var(--space-4);
  max-width: 560px;
  margin: var(--space-8) auto 0;
}

.start-project input,
.start-project textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--neutral-200);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.site-footer {
  display: flex;
  justify-content: space-between;
  padding: var(--space-6) var(--space-4);
  background-color: var(--brand-deep);
  color: var(--text-inverse);
}
"#;
