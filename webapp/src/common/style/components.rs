pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  white-space: nowrap;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn-brand {
  background-color: var(--brand);
  color: var(--text-inverse);
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
}

.btn-brand:hover {
  background-color: var(--brand-light);
}

/* Switch */
.switch {
  position: relative;
  width: 40px;
  height: 22px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--neutral-400);
  cursor: pointer;
}

.switch.checked {
  background-color: var(--brand);
}

.switch .thumb {
  position: absolute;
  top: 3px;
  left: 3px;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background-color: white;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.switch.checked .thumb {
  transform: translateX(18px);
}

/* Modal */
.modal {
  display: flex;
  align-items: center;
  justify-content: center;
  position: fixed;
  inset: 0;
  z-index: 60;
  background-color: rgba(0, 0, 0, 0.5);
}

.modal-content {
  background-color: var(--background);
  color: var(--text-primary);
  border-radius: var(--radius-md);
  padding: var(--space-8);
  width: min(90vw, 480px);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-4);
}

.close {
  font-size: 28px;
  font-weight: bold;
  cursor: pointer;
  background: none;
  border: none;
  color: var(--text-secondary);
}
"#;
