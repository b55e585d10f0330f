pub const CONVERTER_STYLES: &str = r#"
/* Theme tokens */
body.dark {
    --bg: #0d0d1a;
    --card-bg: rgba(20, 20, 40, 0.65);
    --text: #e0e0ff;
    --text-muted: #a0a0cc;
    --border: rgba(100, 100, 220, 0.3);
    --accent1: #7b5cff;
    --accent2: #00f5d4;
    --accent3: #ff4081;
    --error: #ff5252;
}

body.light {
    --bg: #f0f2f5;
    --card-bg: rgba(255, 255, 255, 0.8);
    --text: #2c3e50;
    --text-muted: #7f8c8d;
    --border: rgba(0, 0, 0, 0.1);
    --accent1: #5e35b1;
    --accent2: #00bfa5;
    --accent3: #e91e63;
    --error: #d32f2f;
}

body {
    margin: 0;
    font-family: 'Poppins', sans-serif;
    background-color: var(--bg);
    color: var(--text);
    transition: background-color 0.4s ease, color 0.4s ease;
}

.app-container {
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    display: flex;
    flex-direction: column;
    gap: 30px;
}

/* Header */
.app-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 15px 0;
    border-bottom: 1px solid var(--border);
}

.logo {
    font-size: 2rem;
}

.main-title {
    font-family: 'Source Code Pro', monospace;
    font-size: clamp(1.8rem, 5vw, 2.5rem);
    text-align: center;
    flex-grow: 1;
    letter-spacing: 1px;
    text-shadow: 0 0 5px var(--accent1);
}

.title-accent {
    background: linear-gradient(90deg, var(--accent1), var(--accent2), var(--accent3));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.theme-switcher {
    background: transparent;
    border: 1px solid var(--border);
    color: var(--text);
    font-size: 1.5rem;
    padding: 8px 10px;
    border-radius: 8px;
    cursor: pointer;
}

/* Card */
.interface-card {
    background-color: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 16px;
    padding: 30px;
    backdrop-filter: blur(10px);
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 20px;
    padding-bottom: 10px;
    border-bottom: 1px dashed var(--border);
}

.card-header h2 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0;
}

.card-badge {
    font-family: 'Source Code Pro', monospace;
    font-size: 0.7rem;
    font-weight: 700;
    padding: 5px 12px;
    border-radius: 20px;
    text-transform: uppercase;
    letter-spacing: 1px;
}

.boomer-badge {
    background-color: var(--accent3);
    color: var(--bg);
}

.genz-badge {
    background-color: var(--accent2);
    color: var(--bg);
}

/* Text areas */
.text-area {
    width: 100%;
    box-sizing: border-box;
    background-color: rgba(0, 0, 0, 0.1);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 15px;
    font-size: 1rem;
    line-height: 1.6;
    color: var(--text);
    resize: vertical;
    min-height: 120px;
}

.input-area:focus {
    border-color: var(--accent1);
    outline: none;
}

.output-area {
    background-color: rgba(0, 0, 0, 0.2);
    border-color: var(--accent2);
    white-space: pre-wrap;
    word-wrap: break-word;
}

/* Controls */
.controls-area {
    margin-top: 25px;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 20px;
    flex-wrap: wrap;
}

.slang-level-control {
    display: flex;
    align-items: center;
    gap: 10px;
    font-size: 0.9rem;
    color: var(--text-muted);
}

.slang-slider {
    width: 150px;
    cursor: pointer;
    accent-color: var(--accent1);
}

.slang-level-value {
    font-family: 'Source Code Pro', monospace;
    font-weight: 600;
    color: var(--accent1);
    min-width: 35px;
    text-align: right;
}

.action-buttons {
    display: flex;
    gap: 15px;
}

.action-button {
    padding: 10px 20px;
    font-size: 0.95rem;
    font-weight: 600;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}

.action-button:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.convert-button {
    background: linear-gradient(135deg, var(--accent1) 0%, var(--accent3) 100%);
    color: white;
}

.clear-button {
    background-color: transparent;
    color: var(--text-muted);
    border: 1px solid var(--border);
}

.loader {
    display: inline-block;
    width: 18px;
    height: 18px;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin-loader 0.8s linear infinite;
}

@keyframes spin-loader {
    to { transform: rotate(360deg); }
}

/* Error banner */
.error-banner {
    background-color: rgba(255, 82, 82, 0.1);
    border: 1px solid var(--error);
    border-left-width: 4px;
    color: var(--error);
    padding: 12px 15px;
    margin-top: 20px;
    border-radius: 6px;
    display: flex;
    align-items: center;
    gap: 10px;
    font-size: 0.9rem;
}

/* Output */
.output-display {
    margin-top: 30px;
    position: relative;
}

.copy-button {
    position: absolute;
    top: -15px;
    right: 0;
    background-color: var(--accent2);
    color: var(--bg);
    padding: 6px 12px;
    font-size: 0.8rem;
    border-radius: 6px;
}

.copy-button.copied {
    background-color: var(--accent1);
    color: white;
}

/* Footer */
.app-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 20px 0;
    font-size: 0.85rem;
    color: var(--text-muted);
    border-top: 1px solid var(--border);
}

.status-line {
    font-family: 'Source Code Pro', monospace;
}
"#;
