//! Built-in scaffold: a POST route handler stub per transaction type.
//!
//! The template is rendered as opaque text. Its output is source code for a
//! small web handler, but nothing here parses or validates it.

/// Route handler stub with the transaction type in the route path
pub const DEFAULT_SCAFFOLD_TEMPLATE: &str = "from flask import Flask, request, jsonify
app = Flask(__name__)
@app.route('/{{a}}', methods=['POST'])
def h():
 d = request.get_json()
 if not d:
  return jsonify({'error':'No data provided'}), 400
 return jsonify({'result': d}), 200
if __name__=='__main__':
 app.run()";

/// Transaction types a scaffold is generated for, in output order
pub const DEFAULT_IDENTIFIERS: [&str; 5] = ["credit", "debit", "refund", "authorize", "chargeback"];

pub fn default_identifiers() -> Vec<String> {
    DEFAULT_IDENTIFIERS.iter().map(|id| id.to_string()).collect()
}
