//! The HTML form page served at `/`.
//!
//! The page keeps its rows in a plain JavaScript array, posts them to
//! `/calculate`, renders a sortable table with summary metrics, and
//! downloads the CSV from `/export`. Table cells show the server's formatted
//! rows; sorting uses the unrounded record values.

use crate::config::CalculatorConfig;
use crate::report::format_percent;

/// Escapes text for inclusion in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the calculator page for the given configuration.
pub fn index_html(config: &CalculatorConfig) -> String {
    let metadata = config.metadata();
    let title = escape_html(&metadata.name);
    let commission = format_percent(config.rates().commission_rate);

    PAGE_TEMPLATE
        .replace("{{title}}", &title)
        .replace("{{commission}}", &commission)
        .replace("{{base}}", &escape_html(&metadata.currency.base))
        .replace("{{converted}}", &escape_html(&metadata.currency.converted))
        .replace(
            "{{converted_unit}}",
            &escape_html(&metadata.currency.converted_unit),
        )
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{{title}}</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 1000px; margin: 24px auto; padding: 0 12px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    .row { display: grid; grid-template-columns: 2fr 1fr 1fr auto; gap: 8px; margin: 6px 0; }
    input { padding: 8px; box-sizing: border-box; width: 100%; }
    button { padding: 8px 14px; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 6px 8px; text-align: right; }
    th { cursor: pointer; background: #f4f4f4; }
    td:first-child, th:first-child, td:last-child { text-align: left; }
    .error { color: #b00020; font-weight: 600; }
    .metrics { display: flex; gap: 24px; }
    .metric strong { display: block; font-size: 1.4em; }
  </style>
</head>
<body>
  <label for="app-name">App name</label>
  <input id="app-name" value="{{title}}" />
  <h1 id="heading">{{title}}</h1>
  <h3>Agent Totals Summary</h3>

  <div class="card">
    <div class="row"><strong>Name</strong><strong>{{base}} earned</strong><strong>Target hit (optional)</strong><span></span></div>
    <div id="rows"></div>
    <button id="add-row">Add agent</button>
    <button id="calculate">Calculate</button>
    <label><input type="checkbox" id="include-breakdown" checked style="width:auto" /> Include breakdown in download</label>
    <button id="download" disabled>Download CSV</button>
    <p id="error" class="error"></p>
  </div>

  <div class="card metrics">
    <div class="metric">Total {{base}}<strong id="total-beans">-</strong></div>
    <div class="metric">Total {{converted}}<strong id="total-diamonds">-</strong></div>
  </div>

  <div class="card">
    <table>
      <thead><tr>
        <th data-key="name">Agent</th>
        <th data-key="beans_earned">{{base}} Earned</th>
        <th data-key="salary_usd">Salary (USD)</th>
        <th data-key="salary_in_beans">Salary in {{base}}</th>
        <th data-key="commission">{{commission}} Commission</th>
        <th data-key="total_beans">Total {{base}}</th>
        <th data-key="diamonds">{{converted}}</th>
        <th data-key="breakdown">{{converted_unit}} Breakdown</th>
      </tr></thead>
      <tbody id="results"></tbody>
    </table>
    <ul id="breakdowns"></ul>
  </div>

  <script>
    const rows = [{ name: "", beans_earned: "0", target_hit: "" }];
    let records = [];
    let sortKey = "total_beans";
    let sortAsc = false;

    const el = (id) => document.getElementById(id);
    const columns = ["name", "beans_earned", "salary_usd", "salary_in_beans", "commission",
                     "total_beans", "diamonds", "breakdown"];

    function renderRows() {
      const container = el("rows");
      container.innerHTML = "";
      rows.forEach((row, i) => {
        const div = document.createElement("div");
        div.className = "row";
        div.innerHTML = `<input placeholder="Name" /><input type="number" min="0" step="1" /><input type="number" min="0" step="1" /><button>Remove</button>`;
        const [name, beans, target, remove] = div.children;
        name.value = row.name;
        beans.value = row.beans_earned;
        target.value = row.target_hit;
        name.oninput = () => { row.name = name.value; };
        beans.oninput = () => { row.beans_earned = beans.value; };
        target.oninput = () => { row.target_hit = target.value; };
        remove.onclick = () => { if (rows.length > 1) { rows.splice(i, 1); renderRows(); } };
        container.appendChild(div);
      });
    }

    function requestBody() {
      return JSON.stringify({
        agents: rows.map((r) => {
          const agent = { name: r.name, beans_earned: r.beans_earned === "" ? "0" : String(r.beans_earned) };
          if (r.target_hit !== "") agent.target_hit = String(r.target_hit);
          return agent;
        }),
      });
    }

    function renderResults() {
      const sorted = [...records].sort((a, b) => {
        const cmp = sortKey === "name" || sortKey === "breakdown"
          ? a.row[sortKey].localeCompare(b.row[sortKey])
          : Number(a.raw[sortKey]) - Number(b.raw[sortKey]);
        return sortAsc ? cmp : -cmp;
      });
      el("results").innerHTML = "";
      sorted.forEach((r) => {
        const tr = document.createElement("tr");
        columns.forEach((key) => {
          const td = document.createElement("td");
          td.textContent = r.row[key];
          tr.appendChild(td);
        });
        el("results").appendChild(tr);
      });
    }

    async function calculate() {
      el("error").textContent = "";
      const res = await fetch("/calculate", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: requestBody(),
      });
      const body = await res.json();
      if (!res.ok) {
        el("error").textContent = body.message;
        el("download").disabled = true;
        return;
      }
      records = body.result.records.map((raw, i) => ({ raw, row: body.summary.rows[i] }));
      el("total-beans").textContent = body.summary.total_beans;
      el("total-diamonds").textContent = body.summary.total_diamonds;
      el("breakdowns").innerHTML = "";
      body.summary.breakdowns.forEach((b) => {
        const li = document.createElement("li");
        li.textContent = `${b.name}: ${b.diamonds} diamonds (${b.breakdown})`;
        el("breakdowns").appendChild(li);
      });
      el("download").disabled = false;
      renderResults();
    }

    async function download() {
      const include = el("include-breakdown").checked;
      const res = await fetch(`/export?include_breakdown=${include}`, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: requestBody(),
      });
      if (!res.ok) {
        el("error").textContent = (await res.json()).message;
        return;
      }
      const url = URL.createObjectURL(await res.blob());
      const a = document.createElement("a");
      a.href = url;
      a.download = "agent_beans.csv";
      a.click();
      URL.revokeObjectURL(url);
    }

    document.querySelectorAll("th").forEach((th) => {
      th.onclick = () => {
        const key = th.dataset.key;
        sortAsc = key === sortKey ? !sortAsc : false;
        sortKey = key;
        renderResults();
      };
    });
    el("app-name").oninput = () => {
      el("heading").textContent = el("app-name").value;
      document.title = el("app-name").value;
    };
    el("add-row").onclick = () => { rows.push({ name: "", beans_earned: "0", target_hit: "" }); renderRows(); };
    el("calculate").onclick = calculate;
    el("download").onclick = download;
    renderRows();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_html_uses_config_name_and_rate() {
        let html = index_html(&CalculatorConfig::reference());

        assert!(html.contains("<title>Agent Bean Calculator</title>"));
        assert!(html.contains("5% Commission"));
        assert!(html.contains("<th data-key=\"total_beans\">Total Beans</th>"));
        assert!(html.contains("Diamond Breakdown"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_index_html_renders_server_formatted_rows() {
        let html = index_html(&CalculatorConfig::reference());

        assert!(html.contains("body.summary.rows[i]"));
        assert!(!html.contains("Math.round"));
    }
}
