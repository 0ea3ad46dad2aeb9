//! Global CSS styles for Folio.
//!
//! Dark card surface, outline buttons, glowing person icon.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #09090b;
  --surface-card: #0c0c0f;
  --border: #27272a;

  /* TEXT */
  --text-primary: #fafafa;
  --text-secondary: rgba(250, 250, 250, 0.7);
  --text-muted: rgba(250, 250, 250, 0.5);

  /* ACCENTS */
  --emerald: #10b981;
  --sky: #0ea5e9;
  --blue-tint: rgba(59, 130, 246, 0.1);
  --glow: rgba(255, 255, 255, 0.8);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-fade: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.page {
  display: flex;
  height: 100vh;
  gap: 1rem;
  padding: 1rem;
}

.page-content {
  flex: 1;
  overflow-y: auto;
}

.page-section {
  min-height: 80vh;
  padding: 2.5rem;
  border-bottom: 1px solid var(--border);
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 800;
  margin-bottom: 0.75rem;
}

.section-summary {
  color: var(--text-secondary);
}

/* === Sidebar Card === */
.sidebar-card {
  width: 25%;
  min-width: 260px;
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  background: var(--surface-card);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
}

.sidebar-card__profile {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100%;
  padding: 2.5rem;
}

.person-frame {
  position: relative;
  width: 112px;
  height: 112px;
  margin: 2rem 0;
  padding: 0.5rem;
  border: 2px solid var(--border);
  border-radius: 0.375rem;
}

.person-hitbox {
  position: relative;
  width: 100%;
  height: 100%;
  cursor: pointer;
}

.person-icon {
  width: 100%;
  height: 100%;
  transition: filter var(--transition-fast);
}

.glowing-person-icon {
  filter: drop-shadow(0 0 6px var(--glow)) drop-shadow(0 0 14px var(--sky));
}

.profile-name {
  font-size: var(--text-xl);
  font-weight: 800;
}

.profile-occupation {
  font-size: var(--text-sm);
  font-weight: 700;
  margin-top: 0.125rem;
}

/* === Tooltip === */
.lucky-tooltip {
  position: absolute;
  top: -4rem;
  left: 50%;
  z-index: 50;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 0.5rem 1rem;
  white-space: nowrap;
  font-size: var(--text-xs);
  background: #000;
  border-radius: 0.375rem;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.5);
  pointer-events: none;
}

.lucky-tooltip__accent {
  position: absolute;
  bottom: -1px;
  z-index: 30;
}

.lucky-tooltip__accent--emerald {
  left: 2.5rem;
  right: 2.5rem;
  width: 50%;
  height: 1px;
  background: linear-gradient(to right, transparent, var(--emerald), transparent);
}

.lucky-tooltip__accent--sky {
  left: 2.5rem;
  width: 70%;
  height: 4px;
  background: linear-gradient(to right, transparent, var(--sky), transparent);
}

.lucky-tooltip__title {
  position: relative;
  z-index: 30;
  font-size: var(--text-base);
  font-weight: 600;
}

.lucky-tooltip__subtitle {
  font-size: var(--text-sm);
  text-align: center;
}

.hover-highlight {
  position: absolute;
  inset: 0;
  display: block;
  border-radius: 0.25rem;
  box-shadow: 0 0 0 4px #fff;
  background: var(--blue-tint);
  animation: highlight-in var(--transition-fade) forwards;
}

@keyframes highlight-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Navigation === */
.sidebar-nav {
  display: flex;
  flex-direction: column;
  width: 100%;
  padding: 0.75rem;
  gap: 0.5rem;
}

/* === Buttons === */
.btn-outline {
  height: 2.5rem;
  padding: 0 1rem;
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-primary);
  border-radius: 0.375rem;
  cursor: pointer;
  background: transparent;
  border: 1px solid var(--border);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-outline:hover {
  background: var(--text-primary);
  color: var(--surface);
}
"#;
