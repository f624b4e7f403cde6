//! Global CSS styles for the portfolio page.
//!
//! Dark is the default palette; `[data-theme="light"]` on the page root
//! swaps the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #6366F1;
  --secondary: #8B5CF6;
  --accent: #EC4899;
  --success: #10B981;
  --error: #EF4444;

  --font-body: 'Poppins', system-ui, -apple-system, sans-serif;
  --nav-height: 70px;
  --radius: 12px;
  --transition: 0.3s ease;
}

.page {
  --bg: #0f172a;
  --bg-alt: #1e293b;
  --card: #1e293b;
  --border: rgba(255, 255, 255, 0.08);
  --text: #f1f5f9;
  --text-muted: #94a3b8;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
  background: var(--bg);
  color: var(--text);
  min-height: 100vh;
}

.page[data-theme="light"] {
  --bg: #ffffff;
  --bg-alt: #f8fafc;
  --card: #ffffff;
  --border: rgba(15, 23, 42, 0.08);
  --text: #0f172a;
  --text-muted: #475569;
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-body);
  line-height: 1.7;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 1000;
  transition: background var(--transition), box-shadow var(--transition);
}

.navbar.scrolled {
  background: var(--bg-alt);
  box-shadow: var(--shadow);
}

.nav-container {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-muted);
  font-weight: 500;
  position: relative;
  transition: color var(--transition);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 100%;
  height: 2px;
  background: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger .bar {
  width: 25px;
  height: 3px;
  background: var(--text);
  transition: var(--transition);
}

.hamburger.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.hamburger.active .bar:nth-child(2) { opacity: 0; }
.hamburger.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.8rem 2rem;
  border-radius: 50px;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition), box-shadow var(--transition);
}

.btn-primary {
  background: linear-gradient(135deg, var(--primary), var(--secondary));
  color: white;
  border: none;
}

.btn-outline {
  background: transparent;
  color: var(--primary);
  border: 2px solid var(--primary);
}

.btn:hover {
  transform: translateY(-3px);
  box-shadow: var(--shadow);
}

.icon-btn {
  width: 42px;
  height: 42px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--card);
  color: var(--text);
  cursor: pointer;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  text-align: center;
}

.particles {
  position: absolute;
  inset: 0;
  background-image: radial-gradient(var(--primary) 1px, transparent 1px);
  background-size: 40px 40px;
  opacity: 0.15;
}

.hero-content {
  position: relative;
}

.hero-name {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  font-weight: 800;
}

.hero-name .cursor {
  color: var(--primary);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-role {
  font-size: 1.5rem;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

.hero-social {
  margin-top: 2rem;
  font-size: 1.5rem;
}

/* === Sections === */
.section {
  padding: 6rem 1.5rem;
  max-width: 1200px;
  margin: 0 auto;
}

.section-title {
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 3rem;
}

.skills-grid,
.projects-grid,
.education-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.skill-category,
.project-card,
.education-card,
.timeline-item,
.about-content,
.contact-content {
  opacity: 0;
  transform: translateY(30px);
}

.skill-category,
.project-card,
.education-card,
.timeline-item {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.project-card:hover {
  transform: translateY(-10px) scale(1.02);
}

.skill-item {
  display: inline-block;
  margin: 0.25rem;
  padding: 0.3rem 0.9rem;
  border-radius: 50px;
  background: var(--bg-alt);
  transition: transform var(--transition);
}

.skill-item:hover {
  transform: scale(1.1) translateX(5px);
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  border-left: 2px solid var(--primary);
  padding-left: 1.5rem;
}

.timeline-date,
.education-period {
  color: var(--primary);
  font-weight: 600;
}

.project-image img {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
  border-radius: var(--radius);
}

.tag {
  display: inline-block;
  font-size: 0.8rem;
  margin-right: 0.5rem;
  color: var(--secondary);
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 3rem;
}

.contact-form .form-group {
  margin-bottom: 1.25rem;
}

.contact-form input,
.contact-form textarea {
  width: 100%;
  padding: 0.9rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--bg-alt);
  color: var(--text);
  font: inherit;
}

.contact-form input:focus,
.contact-form textarea:focus {
  outline: none;
  border-color: var(--primary);
}

/* === Footer === */
.footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Scroll to Top === */
.scroll-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition), visibility var(--transition);
}

.scroll-top.visible {
  opacity: 1;
  visibility: visible;
}

/* === Reveal === */
.fade-in-up {
  animation: fadeInUp 0.8s ease-out forwards;
}

@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Notifications === */
.notification-enter {
  animation: slideIn 0.3s ease-out;
}

.notification-exit {
  animation: slideOut 0.3s ease-out forwards;
}

@keyframes slideIn {
  from { transform: translateX(400px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(400px); opacity: 0; }
}

/* === Mobile === */
@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: var(--nav-height);
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
    background: var(--bg-alt);
    transition: left var(--transition);
  }

  .nav-menu.active {
    left: 0;
  }

  .contact-content {
    grid-template-columns: 1fr;
  }
}
"#;
