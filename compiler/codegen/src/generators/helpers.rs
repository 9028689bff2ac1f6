//! Private helper section.
//!
//! Connections call `LndCallback`, `handleStreamResult`, `createHandler` and
//! `Result.init(value:error:)`. Projects that do not ship their own copies enable this
//! section to get file-private ones.

use std::fmt;

use super::SwiftWriter;

const BRIDGE_CALLBACK: &str = r#"#if !REMOTEONLY
private final class LndCallback<T: SwiftProtobuf.Message>: NSObject, LndmobileCallbackProtocol, LndmobileRecvStreamProtocol {
    private let completion: (Result<T, LndApiError>) -> Void

    init(_ completion: @escaping (Result<T, LndApiError>) -> Void) {
        self.completion = completion
    }

    func onError(_ error: Error) {
        Logger.error(error)
        completion(.failure(LndApiError.localizedError(error.localizedDescription)))
    }

    func onResponse(_ data: Data) {
        if let result = try? T(serializedData: data) {
            completion(.success(result))
        } else {
            onError(LndApiError.unknownError)
        }
    }
}
#endif"#;

/// Returns whether the stream is still open; a `nil` result marks its end.
const STREAM_RESULT_HANDLER: &str = r#"private func handleStreamResult<T>(_ result: ResultOrRPCError<T?>, completion: @escaping ApiCompletion<T>) throws -> Bool {
    switch result {
    case .result(let value):
        guard let value = value else { return false }
        completion(.success(value))
        return true
    case .error(let error):
        throw error
    }
}"#;

const UNARY_HANDLER: &str = r#"private func createHandler<T>(_ completion: @escaping ApiCompletion<T>) -> (T?, CallResult) -> Void {
    return { (response: T?, callResult: CallResult) in
        if let response = response {
            completion(.success(response))
        } else {
            let error = LndApiError(callResult: callResult)
            Logger.error(error)
            completion(.failure(error))
        }
    }
}"#;

const RESULT_EXTENSION: &str = r#"private extension Result {
    init(value: Success?, error: Failure) {
        if let value = value {
            self = .success(value)
        } else {
            self = .failure(error)
        }
    }
}"#;

/// Write the helper section.
pub fn emit(w: &mut SwiftWriter<'_>) -> fmt::Result {
    w.writeln("// MARK: - Helper Methods")?;
    w.separated_by_blank_lines(
        [BRIDGE_CALLBACK, STREAM_RESULT_HANDLER, UNARY_HANDLER, RESULT_EXTENSION],
        |w, snippet| w.write_lines(snippet),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_writer::CodeWriter;

    #[test]
    fn test_helpers_are_balanced() {
        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
        emit(&mut w).expect("write to String");

        assert!(out.starts_with("// MARK: - Helper Methods\n#if !REMOTEONLY\n"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
        assert_eq!(out.matches("#if").count(), out.matches("#endif").count());
        for name in ["LndCallback", "handleStreamResult", "createHandler", "init(value: Success?"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_stream_handler_reports_end_of_stream() {
        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
        emit(&mut w).expect("write to String");

        assert!(out.contains("completion: @escaping ApiCompletion<T>) throws -> Bool {"));
        assert!(out.contains("guard let value = value else { return false }"));
        assert!(out.contains("completion(.success(value))\n        return true\n"));
    }
}
