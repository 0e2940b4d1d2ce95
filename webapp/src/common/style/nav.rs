pub const NAV_STYLES: &str = r#"
/* Navigation bar */
.site-nav {
  position: fixed;
  top: 0;
  z-index: 50;
  width: 100%;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

@media (min-width: 1024px) {
  .site-nav {
    padding: 0 160px;
  }
}

.tone-light { color: var(--text-inverse); }
.tone-dark { color: var(--neutral-900); }

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  letter-spacing: 0.05em;
}

.nav-links {
  display: none;
  list-style: none;
  align-items: center;
  gap: var(--space-12);
}

@media (min-width: 1024px) {
  .nav-links { display: flex; }
  .menu-trigger { display: none; }
}

.nav-link,
.nav-contact {
  position: relative;
  background: none;
  border: none;
  color: inherit;
  font: inherit;
  letter-spacing: 0.05em;
  cursor: pointer;
  opacity: 0.8;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-contact:hover {
  opacity: 1;
}

.nav-link.active {
  opacity: 1;
  font-weight: 700;
  color: var(--brand);
}

.nav-link .underline {
  position: absolute;
  left: 0;
  bottom: -2px;
  width: 100%;
  height: 2px;
  background-color: var(--brand);
}

.theme-switch {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-cta {
  display: none;
}

@media (min-width: 640px) {
  .nav-cta { display: inline-flex; }
  .drawer-cta { display: none; }
}

.menu-trigger {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.5rem;
  cursor: pointer;
}

/* Mobile drawer */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 55;
  background-color: rgba(0, 0, 0, 0.4);
}

.drawer {
  position: fixed;
  top: 0;
  right: 0;
  z-index: 56;
  height: 100%;
  width: 80vw;
  max-width: 300px;
  padding: var(--space-12) var(--space-6);
  background-color: var(--drawer);
  color: var(--text-inverse);
}

.drawer ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.drawer .nav-link,
.drawer .nav-contact {
  font-size: 1.125rem;
  font-weight: 600;
  text-transform: uppercase;
}
"#;
