//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js itself is loaded by the host page (script tag); the renderer
//! glue lives in `assets/js/report-chart.js` and is evaluated as a global
//! (no ES modules), exposed via `window.*`. This module provides safe Rust
//! wrappers that serialize the chart config and call that global.

// Embed the renderer JS at compile time
static REPORT_CHART_JS: &str = include_str!("../assets/js/report-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SRB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the renderer glue with a wait-for-Chart.js polling loop.
///
/// `report-chart.js` declares `renderReportChart(...)` via a `function`
/// declaration. To ensure it becomes globally accessible (not block-scoped
/// inside the setInterval callback), the script is evaluated at global
/// scope via indirect eval once the `Chart` global is ready, and the
/// function is then explicitly promoted to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__srbChartScripts = {};",
        serde_json::to_string(REPORT_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForChartJs = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChartJs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__srbChartScripts);
                    delete window.__srbChartScripts;
                    // Promote the function declaration to window explicitly
                    if (typeof renderReportChart !== 'undefined') window.renderReportChart = renderReportChart;
                    window.__srbChartsReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Construct the report chart on the given canvas.
///
/// Uses a polling loop to wait for Chart.js to load, the renderer glue to
/// initialize, and the canvas DOM element to exist before constructing.
/// The chart lives for the page's lifetime; there is no teardown path.
pub fn render_report_chart(canvas_id: &str, config_json: &str) {
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__srbChartsReady &&
                    typeof window.renderReportChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderReportChart('{canvas_id}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SRB] renderReportChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
