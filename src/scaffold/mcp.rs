//! MCP server project generator.
//!
//! Renders a small buildable TypeScript project: package descriptor, compiler
//! config, server-connection config, one zod schema per tool, one handler
//! stub per tool, and an entry point registering everything. Tool identifiers
//! are normalized to snake_case on the wire; the PascalCase stem ties schema,
//! handler, and import path together across files.

use super::GeneratedFile;
use super::names::{to_camel_case, to_pascal_case, to_snake_case};
use crate::spec::{McpComponent, McpTool, ParameterKind, ToolParameter, Transport};

/// Quote a string as a JSON/TypeScript string literal.
fn json_str(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization should not fail")
}

fn generate_package_json(plugin_name: &str) -> GeneratedFile {
    let pkg = serde_json::json!({
        "name": plugin_name,
        "version": "1.0.0",
        "description": format!("MCP server for {plugin_name}"),
        "type": "module",
        "main": "dist/index.js",
        "scripts": {
            "build": "tsc",
            "start": "node dist/index.js",
            "dev": "tsc --watch",
        },
        "dependencies": {
            "@modelcontextprotocol/sdk": "^1.12.1",
            "zod": "^3.24.0",
        },
        "devDependencies": {
            "@types/node": "^22.0.0",
            "typescript": "^5.7.0",
        },
    });

    GeneratedFile {
        relative_path: "package.json".to_string(),
        content: pretty(&pkg),
    }
}

fn generate_tsconfig() -> GeneratedFile {
    let config = serde_json::json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "Node16",
            "moduleResolution": "Node16",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "declaration": true,
            "sourceMap": true,
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"],
    });

    GeneratedFile {
        relative_path: "tsconfig.json".to_string(),
        content: pretty(&config),
    }
}

/// Server-connection config selecting stdio or http transport.
fn generate_mcp_json(mcp: &McpComponent) -> GeneratedFile {
    let server = match mcp.transport {
        Transport::Stdio => serde_json::json!({
            "command": "node",
            "args": ["${CLAUDE_PLUGIN_ROOT}/dist/index.js"],
        }),
        Transport::Http => serde_json::json!({
            "type": "http",
            "url": "https://localhost:3000/mcp",
        }),
    };

    let mut servers = serde_json::Map::new();
    servers.insert(mcp.server_name.clone(), server);
    let document = serde_json::json!({ "mcpServers": servers });

    GeneratedFile {
        relative_path: ".mcp.json".to_string(),
        content: pretty(&document),
    }
}

fn zod_type(param: &ToolParameter) -> String {
    match &param.kind {
        ParameterKind::String => "z.string()".to_string(),
        ParameterKind::Number => "z.number()".to_string(),
        ParameterKind::Boolean => "z.boolean()".to_string(),
        ParameterKind::Enum { enum_values } => {
            if enum_values.is_empty() {
                return "z.string()".to_string();
            }
            let values: Vec<String> = enum_values.iter().map(|v| json_str(v)).collect();
            format!("z.enum([{}])", values.join(", "))
        }
    }
}

/// Coerce a string-typed default into the literal its parameter type expects.
fn default_literal(param: &ToolParameter, default: &str) -> String {
    match param.kind {
        ParameterKind::Number => default
            .parse::<i64>()
            .map(|n| n.to_string())
            .or_else(|_| default.parse::<f64>().map(|f| f.to_string()))
            .unwrap_or_else(|_| "null".to_string()),
        ParameterKind::Boolean => (default == "true" || default == "1").to_string(),
        _ => json_str(default),
    }
}

fn zod_field(param: &ToolParameter) -> String {
    let mut field = zod_type(param);

    if !param.required {
        field.push_str(".optional()");
    }

    if let Some(default) = &param.default_value {
        field.push_str(&format!(".default({})", default_literal(param, default)));
    }

    field.push_str(&format!(".describe({})", json_str(&param.description)));
    field
}

/// Shared type-definitions file: one named schema object per tool.
fn generate_types_file(tools: &[McpTool]) -> GeneratedFile {
    let mut lines = vec!["import { z } from \"zod\";".to_string(), String::new()];

    for tool in tools {
        let schema_name = format!("{}Input", to_pascal_case(&tool.name));
        if tool.parameters.is_empty() {
            lines.push(format!("export const {schema_name} = z.object({{}});"));
        } else {
            lines.push(format!("export const {schema_name} = z.object({{"));
            for param in &tool.parameters {
                lines.push(format!(
                    "  {}: {},",
                    to_camel_case(&param.name),
                    zod_field(param)
                ));
            }
            lines.push("});".to_string());
        }
        lines.push(String::new());
    }

    GeneratedFile {
        relative_path: "src/types.ts".to_string(),
        content: lines.join("\n"),
    }
}

/// Handler stub for one tool, importing its schema only when parameters exist.
fn generate_tool_handler(tool: &McpTool) -> GeneratedFile {
    let snake_name = to_snake_case(&tool.name);
    let pascal_name = to_pascal_case(&tool.name);
    let has_params = !tool.parameters.is_empty();

    let mut lines = Vec::new();

    if has_params {
        lines.push("import { z } from \"zod\";".to_string());
        lines.push(format!(
            "import {{ {pascal_name}Input }} from \"../types.js\";"
        ));
        lines.push(String::new());
        lines.push(format!(
            "type {pascal_name}Params = z.infer<typeof {pascal_name}Input>;"
        ));
        lines.push(String::new());
        lines.push(format!(
            "export async function handle{pascal_name}(params: {pascal_name}Params) {{"
        ));
    } else {
        lines.push(format!("export async function handle{pascal_name}() {{"));
    }

    lines.push("  // TODO: Implement tool logic".to_string());
    lines.push(format!(
        "  const result = {{ status: \"ok\", tool: \"{snake_name}\" }};"
    ));
    lines.push(String::new());
    lines.push("  return {".to_string());
    lines.push(
        "    content: [{ type: \"text\" as const, text: JSON.stringify(result, null, 2) }],"
            .to_string(),
    );
    lines.push("  };".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    GeneratedFile {
        relative_path: format!("src/tools/{snake_name}.ts"),
        content: lines.join("\n"),
    }
}

/// Entry point registering each tool, in declaration order, under its
/// snake_case wire identifier.
fn generate_index_file(mcp: &McpComponent) -> GeneratedFile {
    let mut lines = vec![
        "import { McpServer } from \"@modelcontextprotocol/sdk/server/mcp.js\";".to_string(),
        "import { StdioServerTransport } from \"@modelcontextprotocol/sdk/server/stdio.js\";"
            .to_string(),
    ];

    for tool in &mcp.tools {
        let pascal_name = to_pascal_case(&tool.name);
        let snake_name = to_snake_case(&tool.name);

        if !tool.parameters.is_empty() {
            lines.push(format!(
                "import {{ {pascal_name}Input }} from \"./types.js\";"
            ));
        }
        lines.push(format!(
            "import {{ handle{pascal_name} }} from \"./tools/{snake_name}.js\";"
        ));
    }

    lines.push(String::new());
    lines.push("const server = new McpServer({".to_string());
    lines.push(format!("  name: {},", json_str(&mcp.server_name)));
    lines.push("  version: \"1.0.0\",".to_string());
    lines.push("});".to_string());
    lines.push(String::new());

    for tool in &mcp.tools {
        let snake_name = to_snake_case(&tool.name);
        let pascal_name = to_pascal_case(&tool.name);

        lines.push("server.tool(".to_string());
        lines.push(format!("  {},", json_str(&snake_name)));
        lines.push(format!("  {},", json_str(&tool.description)));

        if tool.parameters.is_empty() {
            lines.push("  {},".to_string());
            lines.push(format!("  async () => handle{pascal_name}(),"));
        } else {
            lines.push(format!("  {pascal_name}Input.shape,"));
            lines.push(format!(
                "  async (params) => handle{pascal_name}(params),"
            ));
        }

        lines.push(");".to_string());
        lines.push(String::new());
    }

    lines.push("const transport = new StdioServerTransport();".to_string());
    lines.push("await server.connect(transport);".to_string());
    lines.push(String::new());

    GeneratedFile {
        relative_path: "src/index.ts".to_string(),
        content: lines.join("\n"),
    }
}

/// Render the complete MCP server project for a plugin.
pub fn generate_mcp_server(plugin_name: &str, mcp: &McpComponent) -> Vec<GeneratedFile> {
    let mut files = vec![
        generate_package_json(plugin_name),
        generate_tsconfig(),
        generate_mcp_json(mcp),
        generate_types_file(&mcp.tools),
        generate_index_file(mcp),
    ];

    for tool in &mcp.tools {
        files.push(generate_tool_handler(tool));
    }

    files
}

fn pretty(value: &serde_json::Value) -> String {
    format!(
        "{}\n",
        serde_json::to_string_pretty(value).expect("json serialization should not fail")
    )
}
